//! Configuration: TOML file under the platform config directory, with CLI
//! flags layered on top by `main`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ProviderConfig, QuizDefaults};
