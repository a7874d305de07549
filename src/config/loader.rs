use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::calculator::OperandFormatter;
use crate::config::types::Config;

const APP_DIR: &str = "calcterm";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the default configuration file path.
    ///
    /// Uses `~/.config/calcterm/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_DIR).join("config.toml")
    }

    /// Default log file: `<cache_dir>/calcterm/calcterm.log`.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        cache_dir.join(APP_DIR).join("calcterm.log")
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: `Config::default()`.
    /// - Otherwise the file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The group separator is not a digit or the decimal point
    /// - The tick rate is non-zero
    /// - The log level is a recognised level filter
    pub fn validate(&self) -> Result<(), ConfigError> {
        let separator = self.display.group_separator;
        if separator.is_ascii_digit() || separator == '.' {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "group_separator '{}' would be confused with the number itself",
                    separator
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        self.log_level()?;
        Ok(())
    }

    /// Parsed `logging.level`.
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.logging.level).map_err(|_| ConfigError::ValidationError {
            message: format!("Unknown log level '{}'", self.logging.level),
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn formatter(&self) -> OperandFormatter {
        OperandFormatter::new(self.display.group_separator)
    }
}
