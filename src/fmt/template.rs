//! Notification messages are templates over the failing error: `{file}:{line} {message}`.
//! The template is parsed into segments once and rendered against a value bag.

/// Closed set of known substitution tokens; unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Message,
    Line,
    File,
    Plugin,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Line => "line",
            Self::File => "file",
            Self::Plugin => "plugin",
        }
    }

    pub const ALL: &'static [Self] = &[Self::Message, Self::Line, Self::File, Self::Plugin];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed message template.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    segments: Vec<TemplateSegment>,
}

impl MessageTemplate {
    /// Used when a failure is reported without an explicit template.
    pub const DEFAULT: &'static str = "{message}";

    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            let close = open + close;
            let name = &rest[open + 1..close];

            current.push_str(&rest[..open]);
            if let Some(ph) = Self::match_placeholder(name) {
                if !current.is_empty() {
                    segments.push(TemplateSegment::Literal(std::mem::take(&mut current)));
                }
                segments.push(TemplateSegment::Placeholder(ph));
            } else {
                current.push_str(&rest[open..=close]);
            }
            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(TemplateSegment::Literal(current));
        }

        Self { segments }
    }

    /// Assembles a template from ready-made segments; literal text is never
    /// scanned for placeholders.
    #[must_use]
    pub const fn from_segments(segments: Vec<TemplateSegment>) -> Self {
        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    #[must_use]
    pub fn render(&self, values: &TemplateValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(s) => result.push_str(s),
                TemplateSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Message => &values.message,
                        Placeholder::Line => &values.line,
                        Placeholder::File => &values.file,
                        Placeholder::Plugin => &values.plugin,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}

/// Values substituted into a `MessageTemplate`. Unset fields render empty.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    pub message: String,
    pub line: String,
    pub file: String,
    pub plugin: String,
}

impl TemplateValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self
    }

    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    #[must_use]
    pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = plugin.into();
        self
    }
}
