//! Human-readable terminal renderer.

use crate::application::services::create_task::CreatedTask;
use crate::domain::BuildInfo;
use crate::output::OutputContext;

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the summary printed after a plist is written.
    pub fn render_created(&self, task: &CreatedTask) {
        self.ctx.print_lines(&self.created_lines(task));
    }

    /// Render the CLI version information.
    pub fn render_version(&self, info: &BuildInfo) {
        self.ctx.print_lines(&self.version_lines(info));
    }

    /// Summary of a written task, ending with the `launchctl load` hint.
    #[must_use]
    pub fn created_lines(&self, task: &CreatedTask) -> Vec<String> {
        let mut lines = vec![
            self.ctx.success_line("Successfully created launchd task"),
            self.ctx.kv_line("Label:", &task.label),
            self.ctx.kv_line("Interval:", &format_interval(task)),
            self.ctx.kv_line("Script:", &task.script.display().to_string()),
            self.ctx.kv_line("Plist:", &task.plist_path.display().to_string()),
        ];
        if task.interval_seconds == 0 {
            lines.push(
                self.ctx
                    .warn_line("Interval is shorter than one second; StartInterval was written as 0"),
            );
        }
        lines.push(String::new());
        lines.push(self.ctx.heading_line("To load the task, run:"));
        lines.push(format!("    {}", task.load_command()));
        lines
    }

    #[must_use]
    pub fn version_lines(&self, info: &BuildInfo) -> Vec<String> {
        let revision = if info.dirty {
            format!("{} (dirty)", info.short_revision())
        } else {
            info.short_revision().to_string()
        };
        let mut lines = vec![
            format!("macron {}", info.version),
            self.ctx.kv_line("Revision:", &revision),
        ];
        if let Some(commit) = info.last_commit {
            lines.push(self.ctx.kv_line("Commit:", &commit.to_rfc3339()));
        }
        lines
    }
}

/// `"<as typed> (<n> seconds)"`.
#[must_use]
pub fn format_interval(task: &CreatedTask) -> String {
    format!("{} ({} seconds)", task.interval, task.interval_seconds)
}
