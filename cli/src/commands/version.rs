//! Version command

use anyhow::Result;

use crate::app::AppContext;
use crate::domain::BuildInfo;

/// Run the version command.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn run(app: &AppContext) -> Result<()> {
    app.renderer().render_version(BuildInfo::get())
}
