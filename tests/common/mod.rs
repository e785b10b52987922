//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_ollama;

use async_trait::async_trait;
use clipsum::clipboard::{ClipboardError, ClipboardSource, MemoryClipboard};
use clipsum::config::FailureRouting;
use clipsum::model::{ChatMessage, ChatModel, ModelError};
use clipsum::summarize::SummarizeWorker;
use clipsum::ui::app::App;
use clipsum::ui::events::EventHandler;
use clipsum::ui::runtime::apply_event;
use parking_lot::Mutex;
use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Multi-threaded runtime standing in for the one `main` builds.
pub fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

/// Chat model that answers after a fixed delay and records what it saw.
#[derive(Clone)]
pub struct ScriptedModel {
    reply: Result<String, String>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicBool>,
    seen: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    fn new(reply: Result<String, String>) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicBool::new(false)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// True once a call has run to the end, even if nobody was waiting.
    pub fn completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    /// Prompt text of the last call.
    pub fn last_prompt(&self) -> Option<String> {
        self.seen
            .lock()
            .last()
            .and_then(|messages| messages.first())
            .map(|m| m.content.clone())
    }

    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.seen.lock().last().cloned()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(messages);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.completed.store(true, Ordering::SeqCst);
        self.reply.clone().map_err(|message| ModelError::ApiError {
            status: 500,
            message,
        })
    }
}

/// Clipboard that can be read but refuses every write.
pub struct ReadOnlyClipboard {
    text: String,
}

impl ReadOnlyClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl ClipboardSource for ReadOnlyClipboard {
    fn get_text(&mut self) -> Option<String> {
        Some(self.text.clone())
    }

    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("denied".to_string()))
    }
}

/// App wired to an in-memory clipboard and a scripted model.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub clipboard: MemoryClipboard,
    pub model: ScriptedModel,
    pub runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn new(clipboard_text: &str, model: ScriptedModel) -> Self {
        Self::with_options(
            clipboard_text,
            model,
            Duration::from_secs(5),
            FailureRouting::Error,
            1000,
        )
    }

    pub fn with_options(
        clipboard_text: &str,
        model: ScriptedModel,
        timeout: Duration,
        failure_routing: FailureRouting,
        max_chars: usize,
    ) -> Self {
        let clipboard = MemoryClipboard::with_text(clipboard_text);
        Self::with_clipboard(
            Box::new(clipboard.clone()),
            clipboard,
            model,
            timeout,
            failure_routing,
            max_chars,
        )
    }

    /// App reading from `source`; `clipboard` is what the test observes.
    pub fn with_clipboard(
        source: Box<dyn ClipboardSource>,
        clipboard: MemoryClipboard,
        model: ScriptedModel,
        timeout: Duration,
        failure_routing: FailureRouting,
        max_chars: usize,
    ) -> Self {
        let runtime = test_runtime();
        let events = EventHandler::detached();
        let worker = SummarizeWorker::new(
            Arc::new(model.clone()),
            runtime.handle().clone(),
            timeout,
            failure_routing,
        );
        let app = App::new(
            source,
            worker,
            events.sender(),
            max_chars,
            "http://127.0.0.1:11434".to_string(),
        );
        Self {
            app,
            events,
            clipboard,
            model,
            runtime,
        }
    }

    /// Feed channel events into the app until the request slot is free.
    pub fn drain_until_idle(&mut self, limit: Duration) {
        let deadline = Instant::now() + limit;
        while self.app.panel().is_busy() {
            assert!(Instant::now() < deadline, "request did not finish in time");
            if let Ok(event) = self.events.next(Duration::from_millis(20)) {
                apply_event(&mut self.app, event);
            }
        }
    }

    /// Count events that arrive within `window` without applying them.
    pub fn count_pending_events(&self, window: Duration) -> usize {
        let deadline = Instant::now() + window;
        let mut count = 0;
        while Instant::now() < deadline {
            if self.events.next(Duration::from_millis(20)).is_ok() {
                count += 1;
            }
        }
        count
    }
}
