//! Error types for model-service calls.

use thiserror::Error;

/// Errors that can occur while calling the chat-model service.
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP transport failure (service unreachable, connection reset, ...).
    #[error("Failed to reach model service: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Model service error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    /// The response parsed but carried no message content.
    #[error("Model returned an empty response")]
    EmptyResponse,
}
