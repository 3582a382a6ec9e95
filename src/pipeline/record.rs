//! The unit flowing through a pipeline: a path pair plus one of three content states.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A live reader shared between a record and its clones. Cloning never copies stream data.
pub type SharedStream = Arc<Mutex<dyn Read + Send>>;

/// Exactly one content state per record.
#[derive(Clone, Default)]
pub enum Contents {
    #[default]
    Null,
    Buffer(Vec<u8>),
    Stream(SharedStream),
}

impl Contents {
    pub fn stream(reader: impl Read + Send + 'static) -> Self {
        Self::Stream(Arc::new(Mutex::new(reader)))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_buffer(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }

    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    #[must_use]
    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// One style violation reported by an upstream lint tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LintFinding {
    pub line: u32,
    pub column: u32,
    pub linter: String,
    pub reason: String,
    /// Set by tools that lint several sources per record (imports, partials).
    /// Relative paths are taken against the record's base.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// What the lint tool attached to a file. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSummary {
    #[serde(default, alias = "error_count")]
    pub error_count: u32,
    #[serde(default)]
    pub results: Vec<LintFinding>,
}

impl LintSummary {
    #[must_use]
    pub fn new(results: Vec<LintFinding>) -> Self {
        let error_count = u32::try_from(results.len()).unwrap_or(u32::MAX);
        Self {
            error_count,
            results,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FileRecord {
    base: PathBuf,
    path: PathBuf,
    pub contents: Contents,
    pub lint: Option<LintSummary>,
}

impl FileRecord {
    /// A record with no contents. `path` is expected to live under `base`.
    pub fn new(base: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            path: path.into(),
            contents: Contents::Null,
            lint: None,
        }
    }

    /// Reads `path` into a buffered record.
    ///
    /// # Errors
    /// I/O errors from reading the file.
    pub fn read(base: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Result<Self, crate::Error> {
        let path = path.into();
        let bytes = fs::read(&path)?;
        Ok(Self::new(base, path).with_contents(Contents::Buffer(bytes)))
    }

    #[must_use]
    pub fn with_contents(mut self, contents: Contents) -> Self {
        self.contents = contents;
        self
    }

    #[must_use]
    pub fn with_buffer(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.with_contents(Contents::Buffer(bytes.into()))
    }

    #[must_use]
    pub fn with_lint(mut self, lint: LintSummary) -> Self {
        self.lint = Some(lint);
        self
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `path` relative to `base`, or `path` itself when it is not under `base`.
    #[must_use]
    pub fn relative(&self) -> &Path {
        self.path.strip_prefix(&self.base).unwrap_or(&self.path)
    }

    /// Final component of `path`.
    #[must_use]
    pub fn basename(&self) -> String {
        basename(&self.path)
    }

    /// Final component of `relative()`; this is what status lines show.
    #[must_use]
    pub fn relative_basename(&self) -> String {
        basename(self.relative())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.contents.is_null()
    }

    #[must_use]
    pub const fn is_buffer(&self) -> bool {
        self.contents.is_buffer()
    }

    #[must_use]
    pub const fn is_stream(&self) -> bool {
        self.contents.is_stream()
    }

    /// Writes buffered contents to `out_dir/relative()`, creating parent directories.
    /// Null and stream records are skipped and return `None`.
    ///
    /// # Errors
    /// I/O errors from creating directories or writing the file.
    pub fn write_to(&self, out_dir: &Path) -> Result<Option<PathBuf>, crate::Error> {
        let Some(bytes) = self.contents.as_buffer() else {
            return Ok(None);
        };

        let target = out_dir.join(self.relative());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, bytes)?;
        Ok(Some(target))
    }
}

/// Final path component as a string; empty for paths like `/` or `..`.
#[must_use]
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
