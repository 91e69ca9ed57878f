//! macron - create launchd scheduled tasks

use clap::Parser;

use macron_cli::cli::Cli;
use macron_cli::domain::TaskError;
use macron_cli::output::json::format_error;

fn main() {
    let cli = Cli::parse();
    cli.init_tracing();
    let json = cli.json;
    if let Err(e) = cli.run() {
        tracing::debug!(error = ?e, "command failed");
        let code = e.downcast_ref::<TaskError>().map_or("error", TaskError::code);
        match format_error(&e.to_string(), code) {
            Ok(body) if json => eprintln!("{body}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
