//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::application::services::create_task::CreatedTask;
use crate::domain::BuildInfo;

/// Styling and quiet state for human output.
///
/// The `*_line` methods build styled lines; [`OutputContext::print_lines`]
/// emits them.
pub struct OutputContext {
    pub styles: Styles,
    pub quiet: bool,
}

impl OutputContext {
    /// Colours are used only when stdout is a terminal and neither
    /// `--no-color` nor `NO_COLOR` is set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();
        Self::with_styles(
            if use_colors {
                Styles::colored()
            } else {
                Styles::default()
            },
            quiet,
        )
    }

    #[must_use]
    pub fn with_styles(styles: Styles, quiet: bool) -> Self {
        Self { styles, quiet }
    }

    #[must_use]
    pub fn success_line(&self, msg: &str) -> String {
        format!("  {} {msg}", "✓".style(self.styles.success))
    }

    #[must_use]
    pub fn warn_line(&self, msg: &str) -> String {
        format!("  {} {msg}", "⚠".style(self.styles.warning))
    }

    #[must_use]
    pub fn heading_line(&self, msg: &str) -> String {
        format!("  {}", msg.style(self.styles.heading))
    }

    /// Key padded to line up the summary values.
    #[must_use]
    pub fn kv_line(&self, key: &str, value: &str) -> String {
        format!("  {}  {value}", format!("{key:<9}").style(self.styles.key))
    }

    /// Print `lines` on stdout unless `quiet`.
    pub fn print_lines(&self, lines: &[String]) {
        if self.quiet {
            return;
        }
        for line in lines {
            println!("{line}");
        }
    }
}

/// Picks human or JSON rendering for command results.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the summary of a written task.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_created(&self, task: &CreatedTask) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_created(task);
                Ok(())
            }
            Self::Json(r) => r.render_created(task),
        }
    }

    /// Render build/version metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, info: &BuildInfo) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(info);
                Ok(())
            }
            Self::Json(r) => r.render_version(info),
        }
    }
}
