//! Status lines for files passing through a pipeline, and the catch-all error handler.

use super::options::{LogOptions, LogOverrides, LogType};
use crate::fmt::{GlyphSet, MessageTemplate, Palette, Placeholder, TemplateSegment};
use crate::internal;
use crate::notify::Notifier;
use crate::output::{Alert, Console};
use crate::pipeline::{Emitter, FileRecord, Stage, TaskError};

use std::sync::Arc;

/// Filename accent forced for `LogType::Bad` lines.
pub const BAD_FILENAME_COLOR: &str = "cyan";

/// Replacement for one log invocation, returned by a modifier.
#[derive(Debug, Clone)]
pub struct LogOverride {
    pub file: Option<FileRecord>,
    pub message: String,
    pub options: LogOptions,
}

/// Runs per file before formatting. `None` keeps file, message and options as they are.
pub type Modifier =
    Box<dyn FnMut(Option<&FileRecord>, &str, &LogOptions) -> Option<LogOverride> + Send>;

/// What `GenericReporter::log` hands back.
pub enum Logged {
    /// `pipe` was set: a stage that logs and forwards every file.
    Stage(LogStage),
    /// `pipe` was unset: the line that was written.
    Line(String),
}

impl Logged {
    #[must_use]
    pub fn into_stage(self) -> Option<LogStage> {
        match self {
            Self::Stage(stage) => Some(stage),
            Self::Line(_) => None,
        }
    }

    #[must_use]
    pub fn into_line(self) -> Option<String> {
        match self {
            Self::Stage(_) => None,
            Self::Line(line) => Some(line),
        }
    }
}

#[derive(Clone)]
pub struct GenericReporter {
    pub(super) notifier: Notifier,
    console: Arc<dyn Console>,
    pub(super) alert: Arc<dyn Alert>,
    pub(super) palette: Palette,
    glyphs: GlyphSet,
    defaults: LogOverrides,
}

impl GenericReporter {
    pub fn new(notifier: Notifier, console: Arc<dyn Console>, alert: Arc<dyn Alert>) -> Self {
        Self {
            notifier,
            console,
            alert,
            palette: Palette::new(),
            glyphs: GlyphSet::default(),
            defaults: LogOverrides::default(),
        }
    }

    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Project-wide defaults that sit between the built-in ones and call-site overrides.
    #[must_use]
    pub fn defaults(mut self, defaults: LogOverrides) -> Self {
        self.defaults = defaults;
        self
    }

    /// Built-in defaults, then configured defaults, then `overrides`.
    #[must_use]
    pub fn options(&self, overrides: LogOverrides) -> LogOptions {
        LogOptions::merged(self.defaults.clone().layer(overrides))
    }

    /// `glyph + " " + filename + message`.
    #[must_use]
    pub fn format_line(&self, file: Option<&FileRecord>, message: &str, options: &LogOptions) -> String {
        let (glyph, color) = match options.kind {
            LogType::Good => (
                self.palette.colorize("green", self.glyphs.good()),
                options.color.as_deref(),
            ),
            LogType::Bad => (
                self.palette.colorize("red", self.glyphs.bad()),
                Some(BAD_FILENAME_COLOR),
            ),
        };

        let mut filename = file.map(FileRecord::relative_basename).unwrap_or_default();
        if file.is_some() && options.space {
            filename.push(' ');
        }
        if let Some(color) = color {
            filename = self.palette.colorize(color, &filename);
        }

        format!("{glyph} {filename}{message}")
    }

    fn write(&self, line: &str) {
        if let Err(e) = self.console.write_line(line) {
            internal::warn("LOG", &format!("Console write failed: {e}"));
        }
    }

    /// One log invocation: modifier, format, write. Returns the line, the
    /// (possibly replaced) file and whether it should be forwarded.
    fn invoke(
        &self,
        file: Option<FileRecord>,
        message: &str,
        options: &LogOptions,
        modifier: Option<&mut Modifier>,
    ) -> (String, Option<FileRecord>, bool) {
        let replaced = modifier.and_then(|modify| modify(file.as_ref(), message, options));
        let (file, message, options) = match replaced {
            Some(LogOverride {
                file,
                message,
                options,
            }) => (file, message, options),
            None => (file, message.to_string(), options.clone()),
        };

        let line = self.format_line(file.as_ref(), &message, &options);
        self.write(&line);
        (line, file, options.pipe)
    }

    /// Merges `overrides` and either returns a stage (`pipe`) or logs once against
    /// `options.file` and returns the line.
    pub fn log(
        &self,
        message: impl Into<String>,
        overrides: LogOverrides,
        modifier: Option<Modifier>,
    ) -> Logged {
        let message = message.into();
        let options = self.options(overrides);

        if options.pipe {
            return Logged::Stage(LogStage {
                reporter: self.clone(),
                message,
                options,
                modifier,
            });
        }

        let mut modifier = modifier;
        let file = options.file.clone();
        let (line, _, _) = self.invoke(file, &message, &options, modifier.as_mut());
        Logged::Line(line)
    }

    /// Immediate logging without a modifier, whatever `pipe` says.
    pub fn log_line(&self, message: &str, overrides: LogOverrides) -> String {
        let options = self.options(overrides.pipe(false));
        let (line, _, _) = self.invoke(options.file.clone(), message, &options, None);
        line
    }

    /// Reports `err` on the console and as a notification, beeps, and ends the stream.
    pub fn report_error(&self, mut err: TaskError, emit: &mut Emitter) {
        err.normalize();

        let (line, template) = match err.file_basename() {
            Some(base) => {
                let line_number = err.line_number.map(|l| l.to_string()).unwrap_or_default();
                (
                    format!(
                        "{}:{} {}",
                        self.palette.colorize("cyan", &base),
                        self.palette.colorize("red", &line_number),
                        err.message
                    ),
                    // The name goes in as literal text so braces in it are never substituted
                    MessageTemplate::from_segments(vec![
                        TemplateSegment::Literal(format!("{base}:")),
                        TemplateSegment::Placeholder(Placeholder::Line),
                        TemplateSegment::Literal(" ".to_string()),
                        TemplateSegment::Placeholder(Placeholder::Message),
                    ]),
                )
            }
            None => (err.message.clone(), MessageTemplate::default()),
        };

        self.log_line(&line, LogOverrides::new().bad().space(false));
        self.alert.beep();
        self.notifier.report_error_with(&err, &template);

        emit.end();
    }

    /// `report_error` as a `Pipeline::on_error` handler.
    pub fn error_handler(&self) -> impl FnMut(TaskError, &mut Emitter) + 'static {
        let reporter = self.clone();
        move |err, emit| reporter.report_error(err, emit)
    }
}

/// Logs each file as it passes and forwards it unchanged.
pub struct LogStage {
    reporter: GenericReporter,
    message: String,
    options: LogOptions,
    modifier: Option<Modifier>,
}

impl LogStage {
    #[must_use]
    pub const fn options(&self) -> &LogOptions {
        &self.options
    }
}

impl Stage for LogStage {
    fn name(&self) -> &str {
        "log"
    }

    fn process(&mut self, file: FileRecord, emit: &mut Emitter) -> Result<(), TaskError> {
        let (_, file, pipe) =
            self.reporter
                .invoke(Some(file), &self.message, &self.options, self.modifier.as_mut());

        if pipe && let Some(file) = file {
            emit.push(file);
        }
        Ok(())
    }
}
