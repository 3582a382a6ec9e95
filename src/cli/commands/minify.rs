//! Reads style sheets, runs them through minify + log, and writes the results
//! under the output directory.

use crate::handles::Handles;
use crate::internal;
use crate::notify::NotifyOptions;
use crate::pipeline::{Emitter, FileRecord, TaskError};
use crate::report::LogOverrides;

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

#[must_use]
pub fn cmd_minify(handles: &Handles, files: &[PathBuf], base: &Path, out: &Path) -> ExitCode {
    let mut records = Vec::with_capacity(files.len());
    for path in files {
        match FileRecord::read(base, path) {
            Ok(record) => records.push(record),
            Err(e) => {
                let err = TaskError::new("minify", e.to_string()).with_file(path);
                handles.generic.report_error(err, &mut Emitter::new());
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(log) = handles
        .generic
        .log("minified", LogOverrides::new().pipe(true), None)
        .into_stage()
    else {
        return ExitCode::FAILURE;
    };

    let failed = Rc::new(Cell::new(false));
    let on_error = {
        let failed = Rc::clone(&failed);
        let mut report = handles.generic.error_handler();
        move |err: TaskError, emit: &mut Emitter| {
            failed.set(true);
            report(err, emit);
        }
    };

    let mut pipeline = handles
        .pipeline()
        .on_error(on_error)
        .stage(handles.minify())
        .stage(log);
    let minified = pipeline.run(records);

    for record in &minified {
        match record.write_to(out) {
            Ok(Some(target)) => internal::debug("MINIFY", &format!("Wrote {}", target.display())),
            Ok(None) => {}
            Err(e) => {
                let err = TaskError::new("minify", e.to_string()).with_file(record.path());
                handles.generic.report_error(err, &mut Emitter::new());
                return ExitCode::FAILURE;
            }
        }
    }

    if failed.get() {
        return ExitCode::FAILURE;
    }

    handles.notify.show(
        &format!("Minified {} file(s)", minified.len()),
        true,
        NotifyOptions::default(),
    );
    ExitCode::SUCCESS
}
