//! Application configuration module
//!
//! Provides configuration types for the application. Values are optional;
//! the runtime `Config` wrapper fills in defaults and environment overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Application configuration, as stored in `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the local sync daemon
    pub backend_url: Option<String>,
    /// Dashboard refresh interval in seconds
    pub poll_interval_secs: Option<u64>,
    /// `tracing` filter directive
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.backend_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        if self.poll_interval_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                message: "must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }

    /// Read and validate a TOML config file
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(ConfigError::Io(err.to_string())),
        };

        let config: AppConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    backend_url: Option<String>,
    poll_interval_secs: Option<u64>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    /// Start from an existing configuration
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            backend_url: config.backend_url,
            poll_interval_secs: config.poll_interval_secs,
            log_filter: config.log_filter,
        }
    }

    /// Set the daemon URL
    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Set the dashboard refresh interval
    pub fn poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = Some(secs);
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            backend_url: self.backend_url,
            poll_interval_secs: self.poll_interval_secs,
            log_filter: self.log_filter,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
    #[error("failed to read config file: {0}")]
    Io(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}
