//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::infra::LocalFs;

/// Create launchd scheduled tasks
#[derive(Parser, Debug)]
#[command(
    name = "macron",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log each step to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new launchd cron task
    ///
    /// Writes ~/Library/LaunchAgents/com.macron.<NAME>.plist that runs SCRIPT
    /// every INTERVAL. An existing task with the same name is replaced.
    Create(commands::create::CreateArgs),

    /// Show version and build information
    Version,
}

impl Cli {
    /// Install the stderr tracing subscriber.
    ///
    /// `RUST_LOG` wins; otherwise `--verbose` selects `debug` and the
    /// default is `warn`.
    pub fn init_tracing(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        // A subscriber may already be installed (tests); keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Create(args) => commands::create::run(&app, &args, &LocalFs::new()),
            Command::Version => commands::version::run(&app),
        }
    }
}
