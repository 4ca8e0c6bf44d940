//! Noughts and crosses - terminal game binary.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::Cli;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file so they never corrupt the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(reset_delay_ms = cli.reset_delay_ms, "Starting noughts");
    noughts::run_tui(Duration::from_millis(cli.reset_delay_ms))
}
