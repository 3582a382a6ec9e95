use super::Alert;
use std::io::{self, Write};

/// Rings the terminal bell (`BEL`) on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Alert for TerminalBell {
    fn beep(&self) {
        let mut stderr = io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

/// For hosts that run unattended.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAlert;

impl Alert for SilentAlert {
    fn beep(&self) {}
}
