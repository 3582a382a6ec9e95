//! One-shot status line, for shell steps that sit outside a pipeline.

use crate::handles::Handles;
use crate::pipeline::FileRecord;
use crate::report::LogOverrides;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(
    handles: &Handles,
    message: &[String],
    bad: bool,
    color: Option<String>,
    file: Option<PathBuf>,
    no_space: bool,
) -> ExitCode {
    let mut overrides = LogOverrides::new().space(!no_space);
    if bad {
        overrides = overrides.bad();
    }
    if let Some(color) = color {
        overrides = overrides.color(color);
    }
    if let Some(path) = file {
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        overrides = overrides.file(FileRecord::new(base, path));
    }

    handles.generic.log_line(&message.join(" "), overrides);
    ExitCode::SUCCESS
}
