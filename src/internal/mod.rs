//! forkhandle's own diagnostic logger: config resolution, backend selection and
//! delivery failures are reported here, on stderr, separate from the pipeline
//! status lines that go through the console sink.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if the CLI,
//! `Handles::from_config` and tests all call `init`.

use crate::config::Config;
use crate::fmt::colorize;
use crate::level::Level;
use std::io::{self, Write};
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

#[derive(Debug)]
struct InternalLogger {
    min_level: Level,
    colors: bool,
}

impl InternalLogger {
    fn write(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }

        let label = if self.colors {
            let name = match level {
                Level::Trace | Level::Debug => "gray",
                Level::Info => "cyan",
                Level::Warn => "yellow",
                Level::Error => "red",
            };
            colorize(name, level.label())
        } else {
            level.label().to_string()
        };

        // stderr write failures have nowhere left to go
        let _ = writeln!(io::stderr(), "[forkhandle] {label} {scope:<8} {msg}");
    }
}

/// Initializes with the default level when no config is at hand.
///
/// Only the first call takes effect; later calls are no-ops.
pub fn init() {
    INTERNAL_LOGGER.get_or_init(|| InternalLogger {
        min_level: Level::Info,
        colors: true,
    });
}

/// Preferred initializer: picks up `[general] level` and `[log] colors`.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| InternalLogger {
        min_level: config.parse_level(),
        colors: config.log.colors,
    });
    if !was_init {
        debug("INTERNAL", &format!("Log level: {}", config.general.level));
        debug(
            "INTERNAL",
            &format!(
                "Notify: enabled={}, backend={}",
                config.notify.enabled, config.notify.backend
            ),
        );
    }
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.write(level, scope, msg);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: a missing include, an undeliverable notification.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
