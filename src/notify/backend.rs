//! Delivery backends. The notifier hands every request to one of these and never
//! looks at the outcome beyond logging a failure.

use super::NotificationRequest;
use crate::internal;
use std::process::{Command, Stdio};

pub trait NotifyBackend: Send + Sync {
    /// # Errors
    /// Whatever kept the notification from being handed off.
    fn deliver(&self, request: &NotificationRequest) -> Result<(), crate::Error>;
}

/// Runs a `notify-send` compatible program: `<cmd> [-i icon] <title> <body>`.
/// The call blocks until the program exits, so no child is left behind.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: String,
}

impl Default for CommandBackend {
    fn default() -> Self {
        Self::new("notify-send")
    }
}

impl CommandBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the program for `request`.
    #[must_use]
    pub fn args(request: &NotificationRequest) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(icon) = &request.icon {
            args.push("-i".to_string());
            args.push(icon.to_string_lossy().into_owned());
        }
        args.push(request.title.clone());

        let body = if request.subtitle.is_empty() {
            request.message.clone()
        } else {
            format!("{}\n{}", request.subtitle, request.message)
        };
        args.push(body);
        args
    }
}

impl NotifyBackend for CommandBackend {
    fn deliver(&self, request: &NotificationRequest) -> Result<(), crate::Error> {
        let args = Self::args(request);
        internal::trace("NOTIFY", &format!("{} {}", self.program, args.join(" ")));

        Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| crate::Error::Notify(format!("{}: {e}", self.program)))
            .and_then(|status| {
                if status.success() {
                    Ok(())
                } else {
                    Err(crate::Error::Notify(format!("{} exited with {status}", self.program)))
                }
            })
    }
}

/// Discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NotifyBackend for NullBackend {
    fn deliver(&self, _request: &NotificationRequest) -> Result<(), crate::Error> {
        Ok(())
    }
}
