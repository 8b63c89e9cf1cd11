use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub quiz: QuizDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where questions come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the Open Trivia DB service (e.g., "https://opentdb.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Session parameters used when the command line does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDefaults {
    /// Category name, e.g. "History".
    #[serde(default = "default_category")]
    pub category: String,
    /// Number of questions per session.
    #[serde(default = "default_amount")]
    pub amount: u32,
    /// "Easy", "Medium", "Hard" or "All Difficulty".
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://opentdb.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_category() -> String {
    "General Knowledge".to_string()
}

fn default_amount() -> u32 {
    10
}

fn default_difficulty() -> String {
    "All Difficulty".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QuizDefaults {
    fn default() -> Self {
        Self {
            category: default_category(),
            amount: default_amount(),
            difficulty: default_difficulty(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
