#![forbid(unsafe_code)]

//! `forkhandle` - status logging, notifications and CSS minification for
//! file build pipelines.
//!
//! - A per-file status logger (`✔ name message` / `✘ name message`), usable as a
//!   pipeline stage or as a one-shot call
//! - A generic error handler that logs, beeps, notifies and ends the stream
//! - A lint reporter for files annotated with lint findings
//! - A regex-based style sheet minifier stage
//! - Pluggable notification delivery (`notify-send`, JSONL, none)
//!
//! # Example
//!
//! ```no_run
//! use forkhandle::{FileRecord, Handles, LogOverrides, PackageDescriptor};
//!
//! let handles = Handles::builder(PackageDescriptor::new("My site")).build();
//!
//! let log = handles
//!     .generic
//!     .log("minified", LogOverrides::new(), None)
//!     .into_stage()
//!     .expect("pipe defaults to true");
//!
//! let mut pipeline = handles.pipeline().stage(handles.minify()).stage(log);
//! let out = pipeline.run([FileRecord::new("src", "src/site.css").with_buffer("a { b : c; }")]);
//! assert_eq!(out.len(), 1);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `forkhandle` binary

pub mod config;
mod error;
pub mod fmt;
pub mod handles;
pub mod internal;
pub mod level;
pub mod minify;
pub mod notify;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, Palette, colorize};
pub use handles::{Handles, HandlesBuilder};
pub use level::Level;
pub use minify::{Minifier, minify_css};
pub use notify::{NotificationRequest, Notifier, NotifyBackend, NotifyOptions};
pub use output::{Alert, Console};
pub use package::PackageDescriptor;
pub use pipeline::{Contents, Emitter, FileRecord, LintFinding, LintSummary, Pipeline, Stage, TaskError};
pub use report::{GenericReporter, LintReporter, LogOptions, LogOverrides, LogType, Logged};
