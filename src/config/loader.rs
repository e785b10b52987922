use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, ConfigOverrides, FailureRouting};

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
    /// Uses `~/.config/clipsum/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("clipsum").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
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

    /// Applies command-line overrides, then re-validates.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(model) = overrides.model {
            self.model.name = model;
        }
        if let Some(base_url) = overrides.base_url {
            self.model.base_url = base_url;
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.model.timeout_seconds = timeout;
        }
        if let Some(max_chars) = overrides.max_chars {
            self.request.max_chars = max_chars;
        }
        if overrides.legacy_failure_routing {
            self.request.failure_routing = FailureRouting::Legacy;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is non-empty and uses http or https
    /// - The model name is non-empty
    /// - Timeout, max_chars and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.model.base_url.trim();
        if base_url.is_empty() {
            return Err(invalid("model.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "model.base_url '{}' must start with http:// or https://",
                    base_url
                ),
            });
        }
        if self.model.name.trim().is_empty() {
            return Err(invalid("model.name must not be empty"));
        }
        if self.model.timeout_seconds == 0 {
            return Err(invalid("model.timeout_seconds must be greater than 0"));
        }
        if self.request.max_chars == 0 {
            return Err(invalid("request.max_chars must be greater than 0"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
