
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default daemon URL
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:7878";

/// Default dashboard refresh interval
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

const DEFAULT_LOG_FILTER: &str = "oversync=info";

const BACKEND_URL_ENV: &str = "OVERSYNC_BACKEND_URL";
const POLL_INTERVAL_ENV: &str = "OVERSYNC_POLL_INTERVAL_SECS";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            config_path: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, config_path: None })
    }

    /// Load `config.toml` from the user config directory, then apply
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path();
        let app = match &config_path {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        let app = Self::apply_env(app)?;
        Ok(Self { app, config_path })
    }

    fn apply_env(app: AppConfig) -> Result<AppConfig, ConfigError> {
        let mut builder = AppConfigBuilder::from_config(app);

        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            builder = builder.backend_url(url);
        }

        if let Ok(raw) = std::env::var(POLL_INTERVAL_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                field: "poll_interval_secs",
                message: format!("{} is not a number of seconds", raw),
            })?;
            builder = builder.poll_interval_secs(secs);
        }

        builder.build()
    }

    /// `<config dir>/oversync/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oversync").join("config.toml"))
    }

    /// Path the configuration was loaded from, if any
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub fn backend_url(&self) -> &str {
        self.app.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url().trim_end_matches('/'), path)
    }

    /// Dashboard refresh interval
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.app.poll_interval_secs.unwrap_or(DEFAULT_POLL_INTERVAL_SECS))
    }

    pub fn log_filter(&self) -> &str {
        self.app.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
