use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::quiz::LoadRequest;

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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quizterm/config.toml` on Linux, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quizterm").join("config.toml")
    }

    /// Default log file: `<data_local_dir>/quizterm/quizterm.log`.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("quizterm").join("quizterm.log")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
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
    /// - The provider base URL is an http(s) URL
    /// - Timeouts are positive
    /// - The quiz defaults form a valid load request
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "provider.base_url must be an http(s) URL, got '{}'",
                    self.provider.base_url
                ),
            });
        }

        if self.provider.timeout_seconds == 0 || self.provider.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "provider timeouts must be greater than zero".to_string(),
            });
        }

        self.default_request()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("quiz defaults: {e}"),
            })?;

        Ok(())
    }

    /// Load request built from the `[quiz]` section alone.
    pub fn default_request(&self) -> Result<LoadRequest, crate::quiz::QuizError> {
        LoadRequest::parse(
            Some(&self.quiz.category),
            Some(self.quiz.amount),
            Some(&self.quiz.difficulty),
        )
    }
}
