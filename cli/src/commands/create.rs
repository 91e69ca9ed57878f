//! `macron create` — write a launchd plist that runs a script periodically.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{DescriptorWriter, HomeDirectory, ScriptLocator};
use crate::application::services::create_task::{CreateTaskInput, create_task};

/// Arguments for the create command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the launchd task (label becomes com.macron.<NAME>)
    #[arg(short, long)]
    pub name: String,

    /// Interval between runs (e.g. 1h, 30m, 1h30m)
    #[arg(short, long)]
    pub interval: String,

    /// Path to the script to execute
    #[arg(short, long)]
    pub script: PathBuf,
}

/// Run the create command.
///
/// # Errors
///
/// Returns the underlying `TaskError` when validation or the write fails.
pub fn run(
    app: &AppContext,
    args: &CreateArgs,
    fs: &(impl ScriptLocator + HomeDirectory + DescriptorWriter),
) -> Result<()> {
    let created = create_task(
        fs,
        &CreateTaskInput {
            name: &args.name,
            interval: &args.interval,
            script: &args.script,
        },
    )?;
    app.renderer().render_created(&created)
}
