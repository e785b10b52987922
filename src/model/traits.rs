//! Seam between the summarize worker and the model service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ModelError;

/// One chat message in the request sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A chat-style model: an ordered list of messages in, reply text out.
///
/// Implementations must be cheap to share across threads; the worker holds
/// them behind an `Arc` and calls them from the shared async runtime.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Model identifier, for logging and display.
    fn model(&self) -> &str;

    /// Run one chat exchange and return the reply's message content.
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, ModelError>;
}
