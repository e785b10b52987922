//! Mock Ollama server for testing the chat client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Response, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A mock reply to return from `/api/chat`.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockReply {
    /// A successful non-streaming chat response carrying `content`.
    pub fn content(content: &str) -> Self {
        let body = json!({
            "model": "test-model",
            "created_at": "2024-05-01T00:00:00Z",
            "message": {"role": "assistant", "content": content},
            "done": true
        });
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    /// An Ollama-style error body.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }).to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Value>>>,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
}

/// Mock model service.
pub struct MockOllama {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockOllama {
    /// Start a new mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/chat", post(handle_chat))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue the reply for the next request.
    pub async fn enqueue(&self, reply: MockReply) {
        self.state.replies.lock().await.push_back(reply);
    }

    /// JSON bodies of all requests received so far.
    pub async fn captured_requests(&self) -> Vec<Value> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockOllama {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_chat(State(state): State<MockState>, Json(body): Json<Value>) -> Response<Body> {
    state.requests.lock().await.push(body);

    let reply = state
        .replies
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockReply::content("default summary"));

    if reply.delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(reply.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(reply.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(reply.body))
        .unwrap()
}
