//! Chat-model service access.
//!
//! [`ChatModel`] is the seam the summarize worker calls through;
//! [`OllamaClient`] is the HTTP implementation for a local Ollama server.

mod client;
mod error;
mod traits;

pub use client::OllamaClient;
pub use error::ModelError;
pub use traits::{ChatMessage, ChatModel};
