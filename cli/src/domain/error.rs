//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::interval::IntervalError;

// ── Error kinds ───────────────────────────────────────────────────────────────

/// Coarse classification of a [`TaskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User input was malformed (interval, task name).
    Validation,
    /// The script path does not exist.
    NotFound,
    /// Home directory lookup, directory creation, or file write failed.
    Io,
}

// ── Task errors ───────────────────────────────────────────────────────────────

/// Errors raised while validating and writing a task descriptor.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid interval '{input}': must be a valid duration (e.g., 1h, 30m, 1h30m): {source}")]
    InvalidInterval {
        input: String,
        #[source]
        source: IntervalError,
    },

    #[error("invalid task name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("script file does not exist: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("error getting home directory: cannot determine home directory")]
    HomeDirUnavailable,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// Wrap an I/O failure with a human-readable context line.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInterval { .. } | Self::InvalidName { .. } => ErrorKind::Validation,
            Self::ScriptNotFound(_) => ErrorKind::NotFound,
            Self::HomeDirUnavailable | Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "validation_error",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Io => "io_error",
        }
    }
}
