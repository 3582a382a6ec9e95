//! Console reporting: the per-file status logger, the generic error handler and
//! the lint reporter built on top of them.

mod generic;
mod lint;
mod options;

pub use generic::{BAD_FILENAME_COLOR, GenericReporter, LogOverride, LogStage, Logged, Modifier};
pub use lint::{LINT_PLUGIN, LintReporter, LintStage};
pub use options::{LogOptions, LogOverrides, LogType};
