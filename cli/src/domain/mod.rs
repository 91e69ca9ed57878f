//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`. All functions are
//! synchronous and take data in, returning data out.

pub mod error;
pub mod interval;
pub mod task;
pub mod version;

pub use error::{ErrorKind, TaskError};
pub use interval::{IntervalError, interval_seconds, parse_interval};
pub use task::{
    LABEL_PREFIX, LAUNCH_AGENTS_DIR_MODE, PLIST_FILE_MODE, TaskDescriptor, TaskName, TaskRequest,
    label_for, launch_agents_dir, render_plist,
};
pub use version::BuildInfo;
