//! Configuration struct definitions.

use crate::report::LogOverrides;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level for forkhandle's own diagnostics.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Package descriptor settings. The description becomes the notification subtitle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    pub name: Option<String>,
    pub description: String,
    /// Path to a `package.json` or `Cargo.toml` to read name/description from.
    /// Values found there win over `name`/`description` above.
    pub manifest: Option<String>,
}

/// Notification settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Turn every notification into a no-op.
    pub enabled: bool,
    /// Backend name (command, json, none).
    pub backend: String,
    /// Program invoked by the command backend.
    pub command: String,
    /// Icon shown next to the notification.
    pub icon: Option<String>,
    /// Target file for the json backend.
    pub json_path: String,
    /// Default for the request's `on_last` flag when the caller leaves it unset.
    pub on_last: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        let json_path = directories::ProjectDirs::from("", "", "forkhandle").map_or_else(
            || "forkhandle-notifications.jsonl".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("notifications.jsonl")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: true,
            backend: "command".to_string(),
            command: "notify-send".to_string(),
            icon: None,
            json_path,
            on_last: true,
        }
    }
}

/// Console status line settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Emit ANSI colors; stripped from every line when off.
    pub colors: bool,
    /// Prefix every line with `[HH:MM:SS]`.
    pub timestamps: bool,
    /// Glyph family (unicode, ascii).
    pub glyphs: String,
    /// Project-wide defaults for `log()` options; call-site values still win.
    pub defaults: LogOverrides,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            colors: true,
            timestamps: true,
            glyphs: "unicode".to_string(),
            defaults: LogOverrides::default(),
        }
    }
}
