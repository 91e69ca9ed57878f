//! Task request, label derivation, and plist rendering.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::error::TaskError;
use crate::domain::interval::interval_seconds;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Prefix for every launchd label written by macron.
pub const LABEL_PREFIX: &str = "com.macron";

/// Mode for `~/Library/LaunchAgents` when it has to be created.
pub const LAUNCH_AGENTS_DIR_MODE: u32 = 0o755;

/// Mode for written plist files.
pub const PLIST_FILE_MODE: u32 = 0o644;

// ── Task name ─────────────────────────────────────────────────────────────────

/// A validated task name.
///
/// Anything is allowed except an empty name or one containing `/` or NUL;
/// hyphens, underscores, dots and digits pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskName(String);

impl TaskName {
    /// Validate a user-supplied task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidName`] if the name is blank or would
    /// escape the launch agents directory.
    pub fn parse(raw: &str) -> Result<Self, TaskError> {
        let reason = if raw.trim().is_empty() {
            Some("name must not be empty")
        } else if raw.contains('/') {
            Some("name must not contain '/'")
        } else if raw.contains('\0') {
            Some("name must not contain NUL")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(TaskError::InvalidName {
                name: raw.to_string(),
                reason,
            }),
            None => Ok(Self(raw.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The launchd label for this task, e.g. `com.macron.backup`.
    #[must_use]
    pub fn label(&self) -> String {
        label_for(&self.0)
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the launchd label for a task name.
#[must_use]
pub fn label_for(name: &str) -> String {
    format!("{LABEL_PREFIX}.{name}")
}

/// `<home>/Library/LaunchAgents`.
#[must_use]
pub fn launch_agents_dir(home: &Path) -> PathBuf {
    home.join("Library").join("LaunchAgents")
}

// ── Request / descriptor ──────────────────────────────────────────────────────

/// A validated request to schedule `script` every `interval`.
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub name: TaskName,
    pub interval: Duration,
    /// Absolute path to an existing script.
    pub script: PathBuf,
}

impl TaskRequest {
    #[must_use]
    pub fn interval_seconds(&self) -> u64 {
        interval_seconds(self.interval)
    }
}

/// The plist to write for a [`TaskRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    pub label: String,
    pub plist_path: PathBuf,
    pub content: String,
}

impl TaskDescriptor {
    /// Derive the label, target path and XML content for `request`.
    #[must_use]
    pub fn new(request: &TaskRequest, agents_dir: &Path) -> Self {
        let label = request.name.label();
        let plist_path = agents_dir.join(format!("{label}.plist"));
        let content = render_plist(
            &label,
            &request.script.to_string_lossy(),
            request.interval_seconds(),
        );
        Self {
            label,
            plist_path,
            content,
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the launchd plist for a periodic task.
///
/// Values are substituted verbatim. XML metacharacters in `label` or
/// `script_path` are not escaped.
#[must_use]
pub fn render_plist(label: &str, script_path: &str, interval_seconds: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>Label</key>
	<string>{label}</string>
	<key>ProgramArguments</key>
	<array>
		<string>{script_path}</string>
	</array>
	<key>StartInterval</key>
	<integer>{interval_seconds}</integer>
	<key>RunAtLoad</key>
	<true/>
	<key>StandardOutPath</key>
	<string>/tmp/{label}.stdout</string>
	<key>StandardErrorPath</key>
	<string>/tmp/{label}.stderr</string>
</dict>
</plist>"#
    )
}
