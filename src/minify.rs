//! Style sheet minification: five regex rewrites, nothing more. No parsing,
//! no shorthand merging, no color shortening.

use crate::pipeline::{Contents, Emitter, FileRecord, Stage, TaskError};
use regex::Regex;
use std::sync::LazyLock;

/// Applied in order, each to the previous rule's output.
static RULES: LazyLock<[(Regex, &'static str); 5]> = LazyLock::new(|| {
    let rule = |pattern: &str| Regex::new(pattern).expect("Invalid minify regex");
    [
        // Block comments (first `*/` closes) and runs of CR/LF/tab
        (rule(r"(?s)/\*.*?\*/|[\r\n\t]+"), ""),
        (rule(r" {2,}"), ""),
        (rule(r" ([{:}]) "), "${1}"),
        (rule(r"([;,]) "), "${1}"),
        (rule(r" !"), "!"),
    ]
});

/// Runs the rewrite rules over `css`.
#[must_use]
pub fn minify_css(css: &str) -> String {
    RULES
        .iter()
        .fold(css.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, *replacement).into_owned()
        })
}

/// Replaces each buffered record with a minified clone. Null, stream and empty
/// records are forwarded as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier;

impl Minifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Stage for Minifier {
    fn name(&self) -> &str {
        "minify"
    }

    fn process(&mut self, file: FileRecord, emit: &mut Emitter) -> Result<(), TaskError> {
        let Some(bytes) = file.contents.as_buffer().filter(|bytes| !bytes.is_empty()) else {
            emit.push(file);
            return Ok(());
        };

        // Undecodable bytes become U+FFFD
        let minified = minify_css(&String::from_utf8_lossy(bytes));

        // The input record is consumed; only the minified one moves on
        emit.push(file.with_contents(Contents::Buffer(minified.into_bytes())));
        Ok(())
    }
}
