//! Strictly Tic-Tac-Toe - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::fs::OpenOptions;
use std::sync::Mutex;
use strictly_tictactoe_console::{AppConfig, Console, LogFilter, Session};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(&config)?;

    run_session()
}

/// Layers CLI flags over the config file over defaults.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    Ok(config
        .with_log_filter(cli.log_filter.clone())
        .with_log_file(cli.log_file.clone()))
}

/// Sends logs to the configured file, or stderr, keeping stdout for the game.
fn initialize_tracing(config: &AppConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let LogFilter {
        filter,
        ignored_env,
    } = config.resolve_log_filter(env.as_deref())?;

    match config.log_file() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    if let Some(directive) = ignored_env {
        warn!(%directive, filter = %config.log_filter(), "Ignoring invalid RUST_LOG");
    }
    info!("Tracing initialized");
    Ok(())
}

/// Plays games on stdin/stdout until the players quit.
#[instrument]
fn run_session() -> Result<()> {
    let mut session = Session::new(Console::stdio());
    let summary = session.run().context("Console session failed")?;
    info!(?summary, "Exiting");
    Ok(())
}
