//! Side-effect sinks the reporters write to: the console and the audible alert.
//! Both are traits so hosts and tests can swap them out.

mod bell;
mod terminal;

pub use bell::{SilentAlert, TerminalBell};
pub use terminal::TerminalConsole;

/// Receives one pre-formatted status line per call.
pub trait Console: Send + Sync {
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write_line(&self, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Fired once per error-class event.
pub trait Alert: Send + Sync {
    fn beep(&self);
}
