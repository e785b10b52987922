//! The summarization request: truncated clipboard text plus its prompt.

use std::fmt;
use uuid::Uuid;

use crate::model::ChatMessage;

/// Appended to text that was cut at the character limit.
pub const ELLIPSIS: &str = "...";

/// Identifies one triggered request so late outcomes can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    id: RequestId,
    text: String,
    truncated: bool,
}

impl SummarizationRequest {
    /// Build a request from raw clipboard text, cutting it to `max_chars`.
    pub fn new(source: &str, max_chars: usize) -> Self {
        let (text, truncated) = truncate_text(source, max_chars);
        Self {
            id: RequestId::new(),
            text,
            truncated,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Text as it will appear in the prompt.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub fn prompt(&self) -> String {
        build_prompt(&self.text)
    }

    /// The chat payload: a single user message carrying the prompt.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![ChatMessage::user(self.prompt())]
    }
}

/// Cut `text` to at most `max_chars` characters, appending [`ELLIPSIS`]
/// when anything was removed. Counts chars, not bytes.
pub fn truncate_text(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (format!("{}{}", &text[..byte_idx], ELLIPSIS), true),
        None => (text.to_string(), false),
    }
}

pub fn build_prompt(text: &str) -> String {
    format!(
        "Please provide an outline and summary for the following text:\n\n{}\n\nOutline:\n\nSummary:",
        text
    )
}
