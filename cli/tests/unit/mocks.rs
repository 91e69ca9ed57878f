//! Shared fake port implementations for unit tests.
//!
//! `FakeFs` keeps the "filesystem" in memory so each test can inspect exactly
//! which directories and files the service touched.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use macron_cli::application::ports::{DescriptorWriter, HomeDirectory, ScriptLocator};
use macron_cli::domain::TaskError;

/// A written file: content plus the mode it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub content: String,
    pub mode: u32,
}

/// In-memory filesystem.
pub struct FakeFs {
    /// Home directory reported to the service; `None` means unavailable.
    pub home: Option<PathBuf>,
    /// Working directory relative script paths are joined to.
    pub cwd: PathBuf,
    /// Absolute paths that exist.
    pub existing: Vec<PathBuf>,
    /// When set, every write fails with this error kind.
    pub fail_writes: Option<std::io::ErrorKind>,
    pub dirs: RefCell<Vec<(PathBuf, u32)>>,
    pub files: RefCell<HashMap<PathBuf, WrittenFile>>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self {
            home: Some(PathBuf::from("/Users/tester")),
            cwd: PathBuf::from("/Users/tester/scripts"),
            existing: vec![PathBuf::from("/Users/tester/scripts/backup.sh")],
            fail_writes: None,
            dirs: RefCell::new(Vec::new()),
            files: RefCell::new(HashMap::new()),
        }
    }

    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    pub fn failing_writes(mut self, kind: std::io::ErrorKind) -> Self {
        self.fail_writes = Some(kind);
        self
    }

    pub fn file(&self, path: &str) -> Option<WrittenFile> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl ScriptLocator for FakeFs {
    fn resolve_script(&self, path: &Path) -> Result<PathBuf, TaskError> {
        let absolute = self.cwd.join(path);
        if self.existing.contains(&absolute) {
            Ok(absolute)
        } else {
            Err(TaskError::ScriptNotFound(absolute))
        }
    }
}

impl HomeDirectory for FakeFs {
    fn home_dir(&self) -> Result<PathBuf, TaskError> {
        self.home.clone().ok_or(TaskError::HomeDirUnavailable)
    }
}

impl DescriptorWriter for FakeFs {
    fn ensure_dir(&self, dir: &Path, mode: u32) -> Result<(), TaskError> {
        self.dirs.borrow_mut().push((dir.to_path_buf(), mode));
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), TaskError> {
        if let Some(kind) = self.fail_writes {
            return Err(TaskError::io(
                "error writing plist file",
                std::io::Error::new(kind, "fake write failure"),
            ));
        }
        self.files.borrow_mut().insert(
            path.to_path_buf(),
            WrittenFile {
                content: content.to_string(),
                mode,
            },
        );
        Ok(())
    }
}
