//! A linear chain of per-file stages.
//!
//! Each input record travels through every stage before the next one enters,
//! so arrival order is preserved end to end. A stage may forward, replace or
//! drop the record it is given, and may end the stream.

mod record;
mod task_error;

pub use record::{Contents, FileRecord, LintFinding, LintSummary, SharedStream, basename};
pub use task_error::TaskError;

use crate::internal;

/// One transform in the chain. `process` is called once per record, in order.
pub trait Stage {
    /// Shown in diagnostics.
    fn name(&self) -> &str;

    /// Pushes zero or more records to `emit`. Returning `Err` hands the error to
    /// the pipeline's error handler; the input record is not forwarded.
    ///
    /// # Errors
    /// Any failure the stage wants reported.
    fn process(&mut self, file: FileRecord, emit: &mut Emitter) -> Result<(), TaskError>;
}

/// Per-call output buffer of a stage, plus its end-of-stream flag.
#[derive(Debug, Default)]
pub struct Emitter {
    pushed: Vec<FileRecord>,
    ended: bool,
}

impl Emitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `file` downstream.
    pub fn push(&mut self, file: FileRecord) {
        self.pushed.push(file);
    }

    /// Signals end-of-stream: no further input reaches this stage.
    pub const fn end(&mut self) {
        self.ended = true;
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub fn pushed(&self) -> &[FileRecord] {
        &self.pushed
    }

    #[must_use]
    pub fn into_pushed(self) -> Vec<FileRecord> {
        self.pushed
    }
}

/// Called with a stage's error and that stage's emitter.
pub type ErrorHandler = Box<dyn FnMut(TaskError, &mut Emitter)>;

/// A stage built from a closure.
pub struct FnStage<F> {
    name: String,
    f: F,
}

impl<F> Stage for FnStage<F>
where
    F: FnMut(FileRecord, &mut Emitter) -> Result<(), TaskError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&mut self, file: FileRecord, emit: &mut Emitter) -> Result<(), TaskError> {
        (self.f)(file, emit)
    }
}

/// Wraps a closure as a `Stage`.
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnStage<F>
where
    F: FnMut(FileRecord, &mut Emitter) -> Result<(), TaskError>,
{
    FnStage {
        name: name.into(),
        f,
    }
}

#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    on_error: Option<ErrorHandler>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the end of the chain.
    #[must_use]
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Installs the handler every stage error is routed to. Without one, the
    /// first error ends the run.
    #[must_use]
    pub fn on_error(mut self, handler: impl FnMut(TaskError, &mut Emitter) + 'static) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Feeds `files` through the chain and returns whatever leaves the last stage.
    /// Stops taking input once any stage has ended the stream.
    pub fn run(&mut self, files: impl IntoIterator<Item = FileRecord>) -> Vec<FileRecord> {
        let mut out = Vec::new();

        for file in files {
            if drive(&mut self.stages, &mut self.on_error, file, &mut out) {
                internal::debug("PIPELINE", "Stream ended, remaining input dropped");
                break;
            }
        }

        out
    }
}

/// Runs `file` through `stages[0]` and everything it emits through the rest.
/// Returns true when some stage ended the stream.
fn drive(
    stages: &mut [Box<dyn Stage>],
    on_error: &mut Option<ErrorHandler>,
    file: FileRecord,
    out: &mut Vec<FileRecord>,
) -> bool {
    let Some((stage, rest)) = stages.split_first_mut() else {
        out.push(file);
        return false;
    };

    let mut emit = Emitter::new();
    if let Err(err) = stage.process(file, &mut emit) {
        internal::debug("PIPELINE", &format!("{} failed: {err}", stage.name()));
        match on_error.as_mut() {
            Some(handler) => handler(err, &mut emit),
            None => {
                internal::error("PIPELINE", &format!("Unhandled error: {err}"));
                emit.end();
            }
        }
    }

    let mut ended = emit.is_ended();
    for next in emit.into_pushed() {
        if drive(rest, on_error, next, out) {
            ended = true;
            break;
        }
    }

    ended
}
