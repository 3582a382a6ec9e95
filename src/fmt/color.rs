//! Accent colors for status lines.
//!
//! `colorize` is pure: it looks the name up in a fixed table and wraps the text
//! in SGR codes. Names outside the table leave the text untouched.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static SGR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid SGR regex"));

/// A terminal foreground color: one of the named 16-color slots or a 24-bit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Every name `from_name` accepts.
    pub const NAMES: &'static [&'static str] = &[
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "gray", "grey",
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" => Self::Gray,
            _ => return None,
        };
        Some(color)
    }

    #[must_use]
    pub fn is_named(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// Parses `#RRGGBB` (leading `#` optional). Anything else is rejected.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }

    #[must_use]
    pub fn fg_ansi(self) -> String {
        match self {
            Self::Black => "\x1b[30m".to_string(),
            Self::Red => "\x1b[31m".to_string(),
            Self::Green => "\x1b[32m".to_string(),
            Self::Yellow => "\x1b[33m".to_string(),
            Self::Blue => "\x1b[34m".to_string(),
            Self::Magenta => "\x1b[35m".to_string(),
            Self::Cyan => "\x1b[36m".to_string(),
            Self::White => "\x1b[37m".to_string(),
            Self::Gray => "\x1b[90m".to_string(),
            Self::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m"),
        }
    }

    /// Foreground reset; leaves bold/underline from surrounding text alone.
    pub const RESET: &'static str = "\x1b[39m";
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::Red => f.write_str("red"),
            Self::Green => f.write_str("green"),
            Self::Yellow => f.write_str("yellow"),
            Self::Blue => f.write_str("blue"),
            Self::Magenta => f.write_str("magenta"),
            Self::Cyan => f.write_str("cyan"),
            Self::White => f.write_str("white"),
            Self::Gray => f.write_str("gray"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Wraps `text` in the escape codes for `color`. Empty text stays empty.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    if text.is_empty() {
        return String::new();
    }
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}

/// Colors `text` with the named accent; unknown names are a no-op.
#[must_use]
pub fn colorize(name: &str, text: &str) -> String {
    Color::from_name(name).map_or_else(|| text.to_string(), |color| paint(text, color))
}

/// Removes SGR escape sequences, for sinks that cannot render them.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    SGR_REGEX.replace_all(text, "").into_owned()
}

/// Named accents with optional per-name overrides from the `[colors]` config table.
///
/// Overrides only re-tint recognized names; the set of names that colorize
/// anything is still `Color::NAMES`.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    overrides: HashMap<String, Color>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from `name = "#RRGGBB"` pairs, skipping unknown names and bad hex.
    #[must_use]
    pub fn from_table(table: &HashMap<String, String>) -> Self {
        let mut palette = Self::new();
        for (name, hex) in table {
            if let Some(color) = Color::from_hex(hex) {
                palette = palette.with_override(name, color);
            }
        }
        palette
    }

    #[must_use]
    pub fn with_override(mut self, name: &str, color: Color) -> Self {
        if Color::is_named(name) {
            self.overrides.insert(name.to_string(), color);
        }
        self
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Color> {
        let base = Color::from_name(name)?;
        Some(self.overrides.get(name).copied().unwrap_or(base))
    }

    #[must_use]
    pub fn colorize(&self, name: &str, text: &str) -> String {
        self.resolve(name)
            .map_or_else(|| text.to_string(), |color| paint(text, color))
    }
}
