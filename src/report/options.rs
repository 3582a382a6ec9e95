//! Options for status lines and how caller overrides merge over defaults.

use crate::pipeline::FileRecord;
use serde::Deserialize;

/// Selects the glyph and, for `Bad`, the filename accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    #[default]
    Good,
    Bad,
}

/// Fully resolved options. Every field always has a value.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub kind: LogType,
    /// Run as a pipeline stage (`true`) or log once, immediately (`false`).
    pub pipe: bool,
    /// Filename accent; ignored unless it names a known color.
    pub color: Option<String>,
    /// Pad the filename with a trailing space.
    pub space: bool,
    /// The file to name in immediate mode.
    pub file: Option<FileRecord>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            kind: LogType::Good,
            pipe: true,
            color: None,
            space: true,
            file: None,
        }
    }
}

impl LogOptions {
    /// Defaults with `overrides` applied.
    #[must_use]
    pub fn merged(overrides: LogOverrides) -> Self {
        Self::default().apply(overrides)
    }

    /// Replaces each field the overrides set; the rest are kept.
    #[must_use]
    pub fn apply(self, overrides: LogOverrides) -> Self {
        Self {
            kind: overrides.kind.unwrap_or(self.kind),
            pipe: overrides.pipe.unwrap_or(self.pipe),
            color: overrides.color.or(self.color),
            space: overrides.space.unwrap_or(self.space),
            file: overrides.file.or(self.file),
        }
    }
}

/// Caller-supplied subset of `LogOptions`. Also the shape of `[log.defaults]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogOverrides {
    #[serde(rename = "type")]
    pub kind: Option<LogType>,
    pub pipe: Option<bool>,
    pub color: Option<String>,
    pub space: Option<bool>,
    #[serde(skip)]
    pub file: Option<FileRecord>,
}

impl LogOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn kind(mut self, kind: LogType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub const fn bad(self) -> Self {
        self.kind(LogType::Bad)
    }

    #[must_use]
    pub const fn pipe(mut self, pipe: bool) -> Self {
        self.pipe = Some(pipe);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn space(mut self, space: bool) -> Self {
        self.space = Some(space);
        self
    }

    #[must_use]
    pub fn file(mut self, file: FileRecord) -> Self {
        self.file = Some(file);
        self
    }

    /// Stacks `top` over `self`: fields `top` sets win.
    #[must_use]
    pub fn layer(self, top: Self) -> Self {
        Self {
            kind: top.kind.or(self.kind),
            pipe: top.pipe.or(self.pipe),
            color: top.color.or(self.color),
            space: top.space.or(self.space),
            file: top.file.or(self.file),
        }
    }
}
