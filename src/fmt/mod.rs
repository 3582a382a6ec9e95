//! Rendering helpers: accent colors, pass/fail glyphs and notification message templates.

mod color;
mod glyph;
mod template;

pub use color::{Color, Palette, colorize, paint, strip_ansi};
pub use glyph::GlyphSet;
pub use template::{MessageTemplate, Placeholder, TemplateSegment, TemplateValues};
