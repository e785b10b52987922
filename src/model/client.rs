//! HTTP client for an Ollama-compatible `/api/chat` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ModelConfig;

use super::error::ModelError;
use super::traits::{ChatMessage, ChatModel};

/// Client for the local model service.
///
/// No overall request timeout is set here: the summarize worker owns the
/// wall-clock bound, and a call it stops waiting for is left to finish.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client from config.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.name.clone(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    fn build_request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
        }
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, ModelError> {
        let url = self.chat_url();
        let request_body = self.build_request(messages);

        tracing::debug!(
            url = %url,
            model = %self.model,
            message_count = request_body.messages.len(),
            "Sending chat request"
        );

        let start = Instant::now();
        let response = self.client.post(&url).json(&request_body).send().await?;
        let status = response.status();
        let response_text = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = extract_error_message(&response_text);
            tracing::error!(
                status = %status,
                latency_ms,
                error = %message,
                "Model service error"
            );
            return Err(ModelError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let content = parse_chat_response(&response_text)?;
        tracing::info!(latency_ms, summary_len = content.len(), "Chat request completed");
        Ok(content)
    }
}

/// Chat request body.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// Chat response body. Only the fields the summarizer reads.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn parse_chat_response(body: &str) -> Result<String, ModelError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ModelError::ParseError(format!("Failed to parse response JSON: {}", e)))?;

    match response.message {
        Some(message) if !message.content.is_empty() => Ok(message.content),
        _ => Err(ModelError::EmptyResponse),
    }
}

/// Ollama reports failures as `{"error": "..."}`; fall back to the raw body.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
