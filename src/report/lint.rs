//! Console and notification reporting for files carrying a lint summary.

use super::generic::GenericReporter;
use super::options::LogOverrides;
use crate::pipeline::{Emitter, FileRecord, LintFinding, Stage, TaskError, basename};

/// Plugin name carried by the aggregate error.
pub const LINT_PLUGIN: &str = "scss-lint";

#[derive(Clone)]
pub struct LintReporter {
    generic: GenericReporter,
}

impl LintReporter {
    #[must_use]
    pub const fn new(generic: GenericReporter) -> Self {
        Self { generic }
    }

    /// `:<line>:<column> - <linter>: <reason>`, line and column red, linter yellow.
    #[must_use]
    pub fn format_finding(&self, finding: &LintFinding) -> String {
        let palette = &self.generic.palette;
        format!(
            ":{}:{} - {}: {}",
            palette.colorize("red", &finding.line.to_string()),
            palette.colorize("red", &finding.column.to_string()),
            palette.colorize("yellow", &finding.linter),
            finding.reason
        )
    }

    /// Logs every finding in order. With at least one finding, beeps, notifies
    /// and returns an error naming each affected file once, in first-seen order.
    pub fn report_errors(&self, file: &FileRecord) -> Option<TaskError> {
        let summary = file.lint.as_ref()?;
        let mut files: Vec<String> = Vec::new();

        for finding in &summary.results {
            let source = finding
                .file
                .as_deref()
                .map_or_else(|| file.path().to_path_buf(), |path| file.base().join(path));
            let base = basename(&source);
            if !files.contains(&base) {
                files.push(base);
            }

            let shown = FileRecord::new(file.base(), source);
            self.generic.log_line(
                &self.format_finding(finding),
                LogOverrides::new().bad().space(false).file(shown),
            );
        }

        if files.is_empty() {
            return None;
        }

        self.generic.alert.beep();
        let error = TaskError::new(
            LINT_PLUGIN,
            format!("SCSS lint failed for {}", files.join(", ")),
        );
        self.generic.notifier.report_error(&error, None);

        Some(error)
    }

    /// Wraps the reporter as a pipeline stage.
    #[must_use]
    pub fn stage(&self) -> LintStage {
        LintStage {
            reporter: self.clone(),
            halt_on_error: false,
            failures: 0,
        }
    }
}

/// Reports each annotated file. Clean files, and by default failing ones too,
/// are forwarded; with `halt_on_error` a failing file ends the stream instead.
pub struct LintStage {
    reporter: LintReporter,
    halt_on_error: bool,
    failures: usize,
}

impl LintStage {
    #[must_use]
    pub const fn halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }

    /// Files that had at least one finding so far.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }
}

impl Stage for LintStage {
    fn name(&self) -> &str {
        LINT_PLUGIN
    }

    fn process(&mut self, file: FileRecord, emit: &mut Emitter) -> Result<(), TaskError> {
        // Already reported and notified; routing it to the error handler would do it twice
        if self.reporter.report_errors(&file).is_some() {
            self.failures += 1;
            if self.halt_on_error {
                emit.end();
                return Ok(());
            }
        }

        emit.push(file);
        Ok(())
    }
}
