//! Command-line front end: run the minifier, the lint reporter, the logger or
//! the notifier from shell scripts and CI jobs.

pub mod commands;

pub use commands::{cmd_lint, cmd_log, cmd_minify, cmd_notify};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// forkhandle - build pipeline status lines and notifications.
#[derive(Parser)]
#[command(
    name = "forkhandle",
    version,
    about = "Build pipeline status lines, notifications and CSS minification"
)]
pub struct Cli {
    /// Config file (defaults to ./forkhandle.toml, then the user config)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Minify style sheets.
    Minify {
        /// Files to minify
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Base directory; output keeps paths relative to it
        #[arg(long, default_value = ".")]
        base: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// Report lint findings from a JSON report.
    Lint {
        /// JSON array of `{ "path": ..., "errorCount": ..., "results": [...] }`
        report: PathBuf,
        /// Base directory the report paths are relative to
        #[arg(long, default_value = ".")]
        base: PathBuf,
    },
    /// Print one status line.
    Log {
        /// Message
        #[arg(required = true)]
        message: Vec<String>,
        /// Use the failure glyph
        #[arg(long)]
        bad: bool,
        /// Filename color
        #[arg(long)]
        color: Option<String>,
        /// File to name in the line
        #[arg(long)]
        file: Option<PathBuf>,
        /// No space between filename and message
        #[arg(long)]
        no_space: bool,
    },
    /// Show a notification.
    Notify {
        /// Message
        #[arg(required = true)]
        message: Vec<String>,
        /// Use the failure title
        #[arg(long)]
        failed: bool,
    },
}
