//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use crate::domain::TaskError;

/// Turns a user-supplied script path into an absolute path to an existing file.
pub trait ScriptLocator {
    /// Resolve `path` against the working directory and check it exists.
    ///
    /// # Errors
    ///
    /// [`TaskError::ScriptNotFound`] when nothing exists at the path,
    /// [`TaskError::Io`] for any other filesystem failure.
    fn resolve_script(&self, path: &Path) -> Result<PathBuf, TaskError>;
}

/// Locates the current user's home directory.
pub trait HomeDirectory {
    /// # Errors
    ///
    /// [`TaskError::HomeDirUnavailable`] when no home directory is known.
    fn home_dir(&self) -> Result<PathBuf, TaskError>;
}

/// Persists rendered descriptors.
pub trait DescriptorWriter {
    /// Create `dir` and any missing parents with `mode`. Succeeds if it exists.
    ///
    /// # Errors
    ///
    /// [`TaskError::Io`] if the directory cannot be created.
    fn ensure_dir(&self, dir: &Path, mode: u32) -> Result<(), TaskError>;

    /// Write `content` to `path` with `mode`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// [`TaskError::Io`] if the file cannot be written.
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), TaskError>;
}
