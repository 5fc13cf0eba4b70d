//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe at the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe_console")]
#[command(about = "Play tic-tac-toe against a friend at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directive (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_filter: Option<String>,
}
