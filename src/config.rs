//! Configuration Layer
//!
//! YAML/JSON loading and validation for the monitoring engine:
//! - Site entries (URL, required content, per-check timeout)
//! - Round interval and result log location
//!
//! Loading fails fast: an invalid entry stops the process before any
//! monitoring starts. Durations are plain numeric seconds in both formats.

mod loader;
mod model;

pub use loader::load_config;
pub use model::{DEFAULT_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS, MonitoringConfig, SiteConfig};

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse YAML configuration.
    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to parse JSON configuration.
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON.
    #[error("unsupported config format '{0}', expected yaml, yml, or json")]
    UnsupportedFormat(String),

    /// Configuration validation failed.
    #[error("config validation error: {0}")]
    Validation(String),
}
