//! Summarization of clipboard text through the model service.
//!
//! - `request.rs` - truncation, prompt template, request ids
//! - `worker.rs` - per-request worker thread with timeout guard

mod request;
mod worker;

pub use request::{build_prompt, truncate_text, RequestId, SummarizationRequest, ELLIPSIS};
pub use worker::{
    summarize_with_timeout, SummarizeWorker, SummaryOutcome, WorkerEvent, WorkerEventKind,
    DISPATCHED_PROGRESS, TIMEOUT_MESSAGE,
};
