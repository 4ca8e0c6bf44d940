//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts and crosses for the terminal.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Delay before a won round resets, in milliseconds
    #[arg(long, default_value_t = 2500)]
    pub reset_delay_ms: u64,

    /// File to write logs to (kept out of the terminal so the UI stays clean)
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
