//! Intents for the summary panel.

use crate::summarize::{RequestId, SummaryOutcome};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummarizeIntent {
    /// Trigger found nothing to summarize.
    ClipboardEmpty,

    /// A worker was started for `request_id`.
    Started { request_id: RequestId },

    /// Trigger arrived while a request was in flight.
    Rejected,

    /// Intermediate progress from the worker.
    Progress { request_id: RequestId, value: u8 },

    /// The worker's one and only outcome.
    Finished {
        request_id: RequestId,
        outcome: SummaryOutcome,
    },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// Scroll the label text by `lines` (negative is up).
    Scroll { lines: i16 },
}

impl Intent for SummarizeIntent {}
