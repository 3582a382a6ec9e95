//! Appends notifications to a JSONL file, one object per line. Handy on headless
//! build hosts where a dashboard or `jq` reads the file instead of a desktop.

use super::NotificationRequest;
use super::backend::NotifyBackend;
use crate::internal;

use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use ulid::Ulid;

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// Time-sortable and unique across concurrent builds.
    id: String,
    ts: String,
    #[serde(flatten)]
    request: &'a NotificationRequest,
}

#[derive(Debug, Clone)]
pub struct JsonBackend {
    file_path: PathBuf,
}

impl JsonBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    /// Config values may use `~`.
    fn resolve_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl NotifyBackend for JsonBackend {
    fn deliver(&self, request: &NotificationRequest) -> Result<(), crate::Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("NOTIFY", &format!("Created directory: {}", parent.display()));
        }

        let entry = JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            request,
        };
        let json = serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{json}")?;

        Ok(())
    }
}
