//! State for the summary panel: the status label and the progress gauge.

use crate::summarize::RequestId;
use crate::ui::mvi::UiState;

pub const INITIAL_LABEL: &str = "Summary will appear here.";
pub const EMPTY_CLIPBOARD_LABEL: &str = "Clipboard is empty.";
pub const SUMMARIZING_LABEL: &str = "Summarizing...";
pub const BUSY_NOTICE: &str = "A summary is already in progress.";

/// What the status label currently reports.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelStatus {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// Last trigger found no text on the clipboard.
    ClipboardEmpty,

    /// A request is in flight. Its id occupies the request slot.
    Summarizing {
        request_id: RequestId,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The last request produced a summary.
    Summary(String),

    /// The last request failed or timed out.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryPanelState {
    pub status: PanelStatus,
    /// Gauge value, 0..=100.
    pub progress: u8,
    /// One-line notice shown in the footer (e.g. a rejected trigger).
    pub notice: Option<String>,
    /// Vertical scroll offset of the label text.
    pub scroll: u16,
}

impl UiState for SummaryPanelState {}

impl SummaryPanelState {
    /// Id of the request occupying the slot, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.status {
            PanelStatus::Summarizing { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.is_busy()
    }

    /// Text of the status label.
    pub fn label(&self) -> String {
        match &self.status {
            PanelStatus::Idle => INITIAL_LABEL.to_string(),
            PanelStatus::ClipboardEmpty => EMPTY_CLIPBOARD_LABEL.to_string(),
            PanelStatus::Summarizing { .. } => SUMMARIZING_LABEL.to_string(),
            PanelStatus::Summary(text) => format!("Summary: {}", text),
            PanelStatus::Error(text) => format!("Error: {}", text),
        }
    }

    pub fn animation_tick(&self) -> Option<u8> {
        match self.status {
            PanelStatus::Summarizing { animation_tick, .. } => Some(animation_tick),
            _ => None,
        }
    }
}
