//! Runtime configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

/// Application configuration.
///
/// Only logging is configurable: the game itself has no knobs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tracing filter directive (e.g. `"info"` or `"strictly_tictactoe_console=debug"`).
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File to write logs to. Logs go to stderr when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Picks the tracing filter, preferring the `env` directive (`RUST_LOG`).
    ///
    /// An `env` directive that fails to parse falls back to the configured
    /// filter and is returned in [`LogFilter::ignored_env`] so it can be
    /// reported once logging is up.
    #[instrument(skip(self), fields(configured = %self.log_filter))]
    pub fn resolve_log_filter(&self, env: Option<&str>) -> Result<LogFilter, ConfigError> {
        let mut ignored_env = None;
        if let Some(directive) = env {
            match EnvFilter::try_new(directive) {
                Ok(filter) => {
                    return Ok(LogFilter {
                        filter,
                        ignored_env: None,
                    });
                }
                Err(e) => {
                    debug!(%directive, error = %e, "Environment filter rejected");
                    ignored_env = Some(format!("{directive} ({e})"));
                }
            }
        }

        let filter = EnvFilter::try_new(&self.log_filter).map_err(|e| {
            ConfigError::new(format!("Invalid log filter {:?}: {}", self.log_filter, e))
        })?;
        Ok(LogFilter {
            filter,
            ignored_env,
        })
    }

    /// Replaces the log filter when `filter` is set.
    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        if let Some(filter) = filter {
            self.log_filter = filter;
        }
        self
    }

    /// Replaces the log file when `file` is set.
    pub fn with_log_file(mut self, file: Option<PathBuf>) -> Self {
        if file.is_some() {
            self.log_file = file;
        }
        self
    }
}

/// Tracing filter picked by [`AppConfig::resolve_log_filter`].
#[derive(Debug)]
pub struct LogFilter {
    /// Filter to install.
    pub filter: EnvFilter,
    /// Environment directive that was rejected, with the parse error.
    pub ignored_env: Option<String>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
