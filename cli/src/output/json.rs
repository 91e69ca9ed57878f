//! JSON output helpers.
//!
//! Every `--json` code path prints one pretty-printed object: the command
//! result on stdout, or the error object from [`format_error`] on stderr.

use anyhow::{Context, Result};

use crate::application::services::create_task::CreatedTask;
use crate::domain::BuildInfo;

/// Renders results as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print a written task as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_created(&self, task: &CreatedTask) -> Result<()> {
        println!("{}", created_json(task)?);
        Ok(())
    }

    /// Print build/version metadata as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, info: &BuildInfo) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(info).context("JSON serialization failed")?
        );
        Ok(())
    }
}

/// Serialize a written task.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn created_json(task: &CreatedTask) -> Result<String> {
    let obj = serde_json::json!({
        "label": task.label,
        "interval": task.interval,
        "interval_seconds": task.interval_seconds,
        "script": task.script.display().to_string(),
        "plist": task.plist_path.display().to_string(),
        "load_command": task.load_command(),
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
