//! One file per subcommand; each returns the process exit code.

mod lint;
mod log;
mod minify;
mod notify;

pub use lint::cmd_lint;
pub use log::cmd_log;
pub use minify::cmd_minify;
pub use notify::cmd_notify;
