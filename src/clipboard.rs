//! Clipboard access: read the text to summarize, then clear it.

use arboard::Clipboard;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to open clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Text store the summarize action reads from and clears.
pub trait ClipboardSource: Send {
    /// Current clipboard text. `None` when the clipboard is empty or holds
    /// no text representation.
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Empty the clipboard. Setting an empty string is idempotent.
    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.set_text("")
    }
}

/// Handler for the system clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSource for ClipboardHandler {
    fn get_text(&mut self) -> Option<String> {
        match self.clipboard.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read clipboard text");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-memory clipboard for tests and embedding without a display server.
///
/// Clones share the same contents.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Arc::new(Mutex::new(text.to_string())),
        }
    }

    pub fn contents(&self) -> String {
        self.contents.lock().clone()
    }
}

impl ClipboardSource for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        let contents = self.contents.lock();
        if contents.is_empty() {
            None
        } else {
            Some(contents.clone())
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = text.to_string();
        Ok(())
    }
}
