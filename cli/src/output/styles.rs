//! Colours for the `create` summary.

use owo_colors::Style;

/// Styles applied to the human summary. The default is plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Styles {
    /// `✓` marker on the success line.
    pub success: Style,
    /// `⚠` marker on warnings.
    pub warning: Style,
    /// Keys of `Label:` / `Plist:` rows.
    pub key: Style,
    /// The "To load the task" hint heading.
    pub heading: Style,
}

impl Styles {
    /// Terminal colours: green, yellow, dimmed keys, bold cyan heading.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            key: Style::new().dimmed(),
            heading: Style::new().bold().cyan(),
        }
    }
}
