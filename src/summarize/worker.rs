//! Background worker that runs one summarization with a wall-clock bound.
//!
//! Each request gets its own OS thread. The model call itself is spawned on
//! the shared tokio runtime; the worker waits on its `JoinHandle` under
//! `tokio::time::timeout`. When the bound elapses the handle is dropped,
//! which detaches the task rather than aborting it: the call may still
//! complete, and its result goes nowhere.

use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::FailureRouting;
use crate::model::{ChatMessage, ChatModel};

use super::request::{RequestId, SummarizationRequest};

/// Shown when the model does not answer within the timeout.
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";

/// Gauge value reported once the call has been handed to the runtime.
pub const DISPATCHED_PROGRESS: u8 = 10;

/// Final result of one request, as the UI renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summary(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEventKind {
    Progress(u8),
    Finished(SummaryOutcome),
}

/// Message from a worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerEvent {
    pub request_id: RequestId,
    pub kind: WorkerEventKind,
}

/// Spawns per-request worker threads that share one model and runtime.
#[derive(Clone)]
pub struct SummarizeWorker {
    model: Arc<dyn ChatModel>,
    runtime: Handle,
    timeout: Duration,
    failure_routing: FailureRouting,
}

impl SummarizeWorker {
    pub fn new(
        model: Arc<dyn ChatModel>,
        runtime: Handle,
        timeout: Duration,
        failure_routing: FailureRouting,
    ) -> Self {
        Self {
            model,
            runtime,
            timeout,
            failure_routing,
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.model()
    }

    /// Start a worker thread for `request`.
    ///
    /// The thread sends at most one progress event and exactly one
    /// `Finished` event on `events`, then exits. Send failures (UI gone)
    /// are ignored.
    pub fn spawn<T>(
        &self,
        request: SummarizationRequest,
        events: Sender<T>,
    ) -> io::Result<JoinHandle<()>>
    where
        T: From<WorkerEvent> + Send + 'static,
    {
        let worker = self.clone();
        thread::Builder::new()
            .name("summarize-worker".to_string())
            .spawn(move || worker.run(request, events))
    }

    fn run<T: From<WorkerEvent>>(self, request: SummarizationRequest, events: Sender<T>) {
        let request_id = request.id();
        tracing::info!(
            request_id = %request_id,
            model = %self.model.model(),
            text_chars = request.text().chars().count(),
            truncated = request.was_truncated(),
            timeout_secs = self.timeout.as_secs(),
            "Summarization started"
        );

        let _ = events.send(T::from(WorkerEvent {
            request_id,
            kind: WorkerEventKind::Progress(DISPATCHED_PROGRESS),
        }));

        let outcome = self.runtime.block_on(summarize_with_timeout(
            Arc::clone(&self.model),
            request.messages(),
            self.timeout,
            self.failure_routing,
        ));

        match &outcome {
            SummaryOutcome::Summary(text) => {
                tracing::info!(request_id = %request_id, summary_len = text.len(), "Summarization finished")
            }
            SummaryOutcome::Error(message) => {
                tracing::warn!(request_id = %request_id, error = %message, "Summarization failed")
            }
        }

        let _ = events.send(T::from(WorkerEvent {
            request_id,
            kind: WorkerEventKind::Finished(outcome),
        }));
    }
}

/// Run one chat call on the current runtime, waiting at most `timeout`.
///
/// Must be polled from within a tokio runtime context.
pub async fn summarize_with_timeout(
    model: Arc<dyn ChatModel>,
    messages: Vec<ChatMessage>,
    timeout: Duration,
    failure_routing: FailureRouting,
) -> SummaryOutcome {
    let call = tokio::spawn(async move { model.chat(messages).await });

    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(Ok(content))) => SummaryOutcome::Summary(content),
        Ok(Ok(Err(err))) => route_failure(err.to_string(), failure_routing),
        Ok(Err(join_err)) => {
            SummaryOutcome::Error(format!("Summarization task failed: {}", join_err))
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = timeout.as_secs(),
                "Model call exceeded timeout; result will be discarded"
            );
            SummaryOutcome::Error(TIMEOUT_MESSAGE.to_string())
        }
    }
}

fn route_failure(message: String, routing: FailureRouting) -> SummaryOutcome {
    match routing {
        FailureRouting::Error => SummaryOutcome::Error(message),
        FailureRouting::Legacy => SummaryOutcome::Summary(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_routing_picks_outcome_channel() {
        assert_eq!(
            route_failure("boom".into(), FailureRouting::Error),
            SummaryOutcome::Error("boom".into())
        );
        assert_eq!(
            route_failure("boom".into(), FailureRouting::Legacy),
            SummaryOutcome::Summary("boom".into())
        );
    }
}
