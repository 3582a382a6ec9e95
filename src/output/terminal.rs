//! Status lines on stdout, `[HH:MM:SS]`-prefixed the way build tools print them.

use super::Console;
use crate::fmt::{colorize, strip_ansi};

use chrono::Local;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct TerminalConsole {
    /// Piped output and CI logs can't render ANSI escape codes.
    colors_enabled: bool,
    timestamps: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
            timestamps: true,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Adds the time prefix and drops escape codes when colors are off.
    #[must_use]
    pub fn format_line(&self, line: &str) -> String {
        let line = if self.timestamps {
            let time = Local::now().format("%H:%M:%S").to_string();
            format!("[{}] {line}", colorize("gray", &time))
        } else {
            line.to_string()
        };

        if self.colors_enabled {
            line
        } else {
            strip_ansi(&line)
        }
    }
}

impl Console for TerminalConsole {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let formatted = self.format_line(line);
        writeln!(io::stdout(), "{formatted}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
