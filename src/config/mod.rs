//! Configuration loading for the summarizer.
//!
//! Settings come from `config.toml` (see [`Config::config_path`]) and are
//! then overridden by command-line flags.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ConfigOverrides, FailureRouting, ModelConfig, RequestConfig, UiConfig};
