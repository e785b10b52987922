use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the local chat-model service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the model service (e.g., "http://127.0.0.1:11434").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every chat call (e.g., "llama3").
    #[serde(default = "default_model_name")]
    pub name: String,
    /// Maximum wall-clock wait for one summarization, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Settings applied to each summarization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Clipboard text longer than this many characters is cut and suffixed with "...".
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    /// Which outcome a failed model call is reported through.
    #[serde(default)]
    pub failure_routing: FailureRouting,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// How a model call that fails (as opposed to timing out) is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureRouting {
    /// Failure text is shown as "Error: ..." and the gauge resets.
    #[default]
    Error,
    /// Failure text is delivered as if it were the summary ("Summary: ...").
    Legacy,
}

fn default_base_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_model_name() -> String {
    "llama3".to_string()
}

fn default_timeout() -> u64 {
    300
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_max_chars() -> usize {
    1000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl ModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_model_name(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            failure_routing: FailureRouting::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_chars: Option<usize>,
    pub legacy_failure_routing: bool,
}
