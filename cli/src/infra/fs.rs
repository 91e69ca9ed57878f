//! Filesystem infrastructure — implements the script, home, and writer ports.

use std::io::Write as _;
use std::path::{Component, Path, PathBuf};

use crate::application::ports::{DescriptorWriter, HomeDirectory, ScriptLocator};
use crate::domain::TaskError;

/// Production filesystem implementation of the application ports.
///
/// `home` overrides the user's home directory; `None` asks the OS.
#[derive(Debug, Default, Clone)]
pub struct LocalFs {
    home: Option<PathBuf>,
}

impl LocalFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `home` instead of the OS home directory.
    #[must_use]
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }
}

impl ScriptLocator for LocalFs {
    fn resolve_script(&self, path: &Path) -> Result<PathBuf, TaskError> {
        let absolute = std::path::absolute(path)
            .map(|p| clean(&p))
            .map_err(|e| TaskError::io("error resolving script path", e))?;
        match std::fs::metadata(&absolute) {
            Ok(_) => Ok(absolute),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TaskError::ScriptNotFound(absolute))
            }
            Err(e) => Err(TaskError::io("error checking script file", e)),
        }
    }
}

/// Lexically drop `.` and fold `..` into its parent. Symlinks are not followed.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

impl HomeDirectory for LocalFs {
    fn home_dir(&self) -> Result<PathBuf, TaskError> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => dirs::home_dir().ok_or(TaskError::HomeDirUnavailable),
        }
    }
}

impl DescriptorWriter for LocalFs {
    fn ensure_dir(&self, dir: &Path, mode: u32) -> Result<(), TaskError> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        builder
            .create(dir)
            .map_err(|e| TaskError::io("error creating LaunchAgents directory", e))
    }

    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), TaskError> {
        let write_err = |e: std::io::Error| TaskError::io("error writing plist file", e);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Stage next to the target so the final rename stays on one filesystem.
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(content.as_bytes()).map_err(write_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(mode))
                .map_err(write_err)?;
        }
        #[cfg(not(unix))]
        let _ = mode;
        staged.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
