//! Pass/fail marks at the start of every status line.

/// Which glyph family to print; CI logs and some Windows consoles mangle `✔`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Unicode,
    Ascii,
}

impl GlyphSet {
    #[must_use]
    pub const fn good(self) -> &'static str {
        match self {
            Self::Unicode => "✔",
            Self::Ascii => "+",
        }
    }

    #[must_use]
    pub const fn bad(self) -> &'static str {
        match self {
            Self::Unicode => "✘",
            Self::Ascii => "x",
        }
    }

    /// Unrecognized names fall back to unicode.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "ascii" => Self::Ascii,
            _ => Self::Unicode,
        }
    }
}
