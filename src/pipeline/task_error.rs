//! Failure object passed from a stage to the pipeline's error handler.

use super::record::basename;
use crate::fmt::TemplateValues;
use std::fmt;
use std::path::PathBuf;

/// Upstream tools disagree on where they put the offending path: some set
/// `file`, others `file_name`. `normalize` folds the latter into the former.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskError {
    /// Name of the stage or tool that failed.
    pub plugin: String,
    pub message: String,
    pub file: Option<PathBuf>,
    pub file_name: Option<PathBuf>,
    pub line_number: Option<u32>,
}

impl TaskError {
    pub fn new(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub const fn with_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Copies `file_name` into `file` when only the former is set.
    pub fn normalize(&mut self) {
        if self.file.is_none() {
            self.file.clone_from(&self.file_name);
        }
    }

    /// Base name of `file`, if any.
    #[must_use]
    pub fn file_basename(&self) -> Option<String> {
        self.file.as_deref().map(basename)
    }

    /// Values for rendering a `MessageTemplate` against this error.
    #[must_use]
    pub fn template_values(&self) -> TemplateValues {
        TemplateValues::new()
            .message(&self.message)
            .line(self.line_number.map(|l| l.to_string()).unwrap_or_default())
            .file(self.file_basename().unwrap_or_default())
            .plugin(&self.plugin)
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plugin.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.plugin, self.message)
        }
    }
}

impl std::error::Error for TaskError {}

impl From<crate::Error> for TaskError {
    fn from(e: crate::Error) -> Self {
        Self::new("forkhandle", e.to_string())
    }
}
