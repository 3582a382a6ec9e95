//! Feeds an external lint tool's JSON report through the lint reporter.

use crate::handles::Handles;
use crate::internal;
use crate::pipeline::{FileRecord, LintSummary};
use crate::report::LogOverrides;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Deserialize)]
struct ReportEntry {
    path: PathBuf,
    #[serde(flatten)]
    summary: LintSummary,
}

/// Reads `[{ "path": ..., "errorCount": ..., "results": [...] }, ...]`.
///
/// # Errors
/// I/O and JSON errors.
fn read_report(path: &Path) -> Result<Vec<ReportEntry>, crate::Error> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[must_use]
pub fn cmd_lint(handles: &Handles, report: &Path, base: &Path) -> ExitCode {
    let entries = match read_report(report) {
        Ok(entries) => entries,
        Err(e) => {
            internal::error("LINT", &format!("Cannot read {}: {e}", report.display()));
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0usize;
    for entry in entries {
        let record = FileRecord::new(base, base.join(&entry.path)).with_lint(entry.summary);
        if handles.lint.report_errors(&record).is_some() {
            failed += 1;
        } else {
            handles
                .generic
                .log_line("lint passed", LogOverrides::new().file(record));
        }
    }

    if failed > 0 {
        internal::info("LINT", &format!("{failed} file(s) failed"));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
