//! Application service — create a launchd task descriptor.
//!
//! Validates the interval, resolves the script, renders the plist and writes
//! it into `~/Library/LaunchAgents`. Loading the agent is left to the user.

use std::path::{Path, PathBuf};

use crate::application::ports::{DescriptorWriter, HomeDirectory, ScriptLocator};
use crate::domain::{
    LAUNCH_AGENTS_DIR_MODE, PLIST_FILE_MODE, TaskDescriptor, TaskError, TaskName, TaskRequest,
    launch_agents_dir, parse_interval,
};

/// Raw `create` input as typed by the user.
#[derive(Debug, Clone, Copy)]
pub struct CreateTaskInput<'a> {
    pub name: &'a str,
    pub interval: &'a str,
    pub script: &'a Path,
}

/// Outcome of a successful `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    pub label: String,
    /// The interval exactly as the user typed it.
    pub interval: String,
    pub interval_seconds: u64,
    pub script: PathBuf,
    pub plist_path: PathBuf,
}

impl CreatedTask {
    /// The command that activates the written agent.
    #[must_use]
    pub fn load_command(&self) -> String {
        format!("launchctl load {}", self.plist_path.display())
    }
}

/// Validate `input` and write its plist.
///
/// Any existing plist with the same label is overwritten.
///
/// # Errors
///
/// Returns a validation error for a malformed interval or name, a not-found
/// error for a missing script, and an I/O error if the home directory is
/// unknown or the plist cannot be written.
pub fn create_task(
    fs: &(impl ScriptLocator + HomeDirectory + DescriptorWriter),
    input: &CreateTaskInput<'_>,
) -> Result<CreatedTask, TaskError> {
    let interval = parse_interval(input.interval).map_err(|source| TaskError::InvalidInterval {
        input: input.interval.to_string(),
        source,
    })?;
    tracing::debug!(raw = input.interval, parsed = ?interval, "parsed interval");

    let script = fs.resolve_script(input.script)?;
    tracing::debug!(script = %script.display(), "resolved script");

    let name = TaskName::parse(input.name)?;
    let request = TaskRequest {
        name,
        interval,
        script,
    };
    if request.interval_seconds() == 0 {
        tracing::warn!(
            interval = input.interval,
            "interval is shorter than one second; StartInterval will be 0"
        );
    }

    let agents_dir = launch_agents_dir(&fs.home_dir()?);
    fs.ensure_dir(&agents_dir, LAUNCH_AGENTS_DIR_MODE)?;

    let descriptor = TaskDescriptor::new(&request, &agents_dir);
    fs.write_file(&descriptor.plist_path, &descriptor.content, PLIST_FILE_MODE)?;
    tracing::debug!(
        label = %descriptor.label,
        plist = %descriptor.plist_path.display(),
        "wrote plist"
    );

    Ok(CreatedTask {
        label: descriptor.label,
        interval: input.interval.to_string(),
        interval_seconds: request.interval_seconds(),
        script: request.script,
        plist_path: descriptor.plist_path,
    })
}
