mod console;
mod error;
mod executor;
mod loader;
mod model;
mod prompt;
mod settings;

use anyhow::{anyhow, Context, Result};
use console::{Console, Status};
use prompt::{ConfirmGate, StdinSource};
use settings::Settings;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only operator text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to initialise logging")?;

    let settings = Settings::from_env();
    debug!(?settings, "starting configuration check");

    let mut console = Console::stdout();
    let mut gate = ConfirmGate::new(StdinSource::new(), settings.auto);

    match executor::run(&settings.config_dir, &mut gate, &mut console) {
        Ok(report) => {
            debug!(chips = report.chips.len(), "configuration check passed");
            Ok(())
        }
        Err(err) => {
            console
                .status(Status::Failure, &err.to_string())
                .context("Failed to write to stdout")?;
            std::process::exit(err.exit_code());
        }
    }
}
