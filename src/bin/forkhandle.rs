//! `forkhandle` binary.
//!
//! Usage:
//!   forkhandle minify <files..> [--base DIR] [--out DIR]
//!   forkhandle lint <report.json> [--base DIR]
//!   forkhandle log <message..> [--bad] [--color C] [--file F] [--no-space]
//!   forkhandle notify <message..> [--failed]

use clap::Parser;
use forkhandle::cli::{Cli, Command, cmd_lint, cmd_log, cmd_minify, cmd_notify};
use forkhandle::config::Config;
use forkhandle::handles::Handles;
use forkhandle::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let handles = match Handles::from_config(&config) {
        Ok(h) => h,
        Err(e) => {
            internal::error("CLI", &format!("{e}"));
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Minify { files, base, out } => cmd_minify(&handles, &files, &base, &out),
        Command::Lint { report, base } => cmd_lint(&handles, &report, &base),
        Command::Log {
            message,
            bad,
            color,
            file,
            no_space,
        } => cmd_log(&handles, &message, bad, color, file, no_space),
        Command::Notify { message, failed } => cmd_notify(&handles, &message, failed),
    }
}
