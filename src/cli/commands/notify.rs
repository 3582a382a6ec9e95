use crate::handles::Handles;
use crate::notify::NotifyOptions;
use std::process::ExitCode;

#[must_use]
pub fn cmd_notify(handles: &Handles, message: &[String], failed: bool) -> ExitCode {
    handles
        .notify
        .show(&message.join(" "), !failed, NotifyOptions::default());
    ExitCode::SUCCESS
}
