//! Engine configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Komi for records without a `KM` property.
    #[serde(default = "default_komi")]
    komi: f64,

    /// Replay SGF moves through the legality check.
    #[serde(default = "default_check_legal")]
    check_legal: bool,

    /// Keep suicide moves when listing candidates.
    #[serde(default)]
    allow_suicide: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_komi() -> f64 {
    strictly_go::DEFAULT_KOMI
}

fn default_check_legal() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            komi: default_komi(),
            check_legal: default_check_legal(),
            allow_suicide: false,
            log_filter: default_log_filter(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if !config.komi.is_finite() {
            return Err(ConfigError::new(format!(
                "komi must be finite, got {}",
                config.komi
            )));
        }

        info!(komi = config.komi, check_legal = config.check_legal, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
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
