use std::sync::mpsc::Sender;

use crate::clipboard::ClipboardSource;
use crate::summarize::{
    RequestId, SummarizationRequest, SummarizeWorker, SummaryOutcome, WorkerEvent,
    WorkerEventKind,
};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::summarization::{SummarizeIntent, SummarizeReducer, SummaryPanelState};

/// Number of characters of clipboard text echoed to the log.
const PREVIEW_CHARS: usize = 50;

/// Lines scrolled by PageUp/PageDown.
pub const PAGE_LINES: i16 = 10;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// What a press of the summarize button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerResult {
    /// A worker was started for this request.
    Started(RequestId),
    /// Nothing to summarize; no worker was started.
    ClipboardEmpty,
    /// A request is already in flight; the clipboard was not touched.
    Busy,
    /// The clipboard could not be cleared; no worker was started.
    ClearFailed,
    /// The worker thread could not be spawned.
    SpawnFailed,
}

/// UI controller: owns the panel state, the clipboard and the worker.
///
/// All methods run on the UI thread. Workers report back only through the
/// event channel, and their events come in via [`App::on_worker_event`].
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Label/gauge state (MVI pattern).
    panel: SummaryPanelState,
    clipboard: Box<dyn ClipboardSource>,
    worker: SummarizeWorker,
    events: Sender<AppEvent>,
    max_chars: usize,
    endpoint: String,
}

impl App {
    pub fn new(
        clipboard: Box<dyn ClipboardSource>,
        worker: SummarizeWorker,
        events: Sender<AppEvent>,
        max_chars: usize,
        endpoint: String,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            panel: SummaryPanelState::default(),
            clipboard,
            worker,
            events,
            max_chars,
            endpoint,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panel(&self) -> &SummaryPanelState {
        &self.panel
    }

    pub fn model_name(&self) -> &str {
        self.worker.model_name()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_tick(&mut self) {
        if self.panel.is_animating() {
            self.dispatch(SummarizeIntent::AnimationTick);
        }
    }

    pub fn scroll(&mut self, lines: i16) {
        self.dispatch(SummarizeIntent::Scroll { lines });
    }

    /// Handle the summarize button.
    ///
    /// Order matters: the busy check comes first so a rejected trigger
    /// leaves the clipboard alone, and the clipboard is cleared before the
    /// worker starts so it is never touched concurrently. A failed clear
    /// ends the request with an error and starts no worker.
    pub fn trigger_summarize(&mut self) -> TriggerResult {
        if let Some(in_flight) = self.panel.in_flight() {
            tracing::info!(request_id = %in_flight, "Summarize rejected: request in flight");
            self.dispatch(SummarizeIntent::Rejected);
            return TriggerResult::Busy;
        }

        let content = match self.clipboard.get_text() {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::info!("Clipboard is empty");
                self.dispatch(SummarizeIntent::ClipboardEmpty);
                return TriggerResult::ClipboardEmpty;
            }
        };

        let preview: String = content.chars().take(PREVIEW_CHARS).collect();
        tracing::debug!(preview = %preview, chars = content.chars().count(), "Current clipboard content");

        let request = SummarizationRequest::new(&content, self.max_chars);
        let request_id = request.id();

        // Occupy the slot before the worker can possibly report back.
        self.dispatch(SummarizeIntent::Started { request_id });

        if let Err(err) = self.clipboard.clear() {
            tracing::error!(request_id = %request_id, error = %err, "Failed to clear clipboard");
            self.dispatch(SummarizeIntent::Finished {
                request_id,
                outcome: SummaryOutcome::Error(err.to_string()),
            });
            return TriggerResult::ClearFailed;
        }
        tracing::info!("Clipboard has been cleared");

        match self.worker.spawn(request, self.events.clone()) {
            Ok(_) => TriggerResult::Started(request_id),
            Err(err) => {
                tracing::error!(error = %err, "Failed to spawn summarize worker");
                self.dispatch(SummarizeIntent::Finished {
                    request_id,
                    outcome: SummaryOutcome::Error(format!("Failed to start worker: {}", err)),
                });
                TriggerResult::SpawnFailed
            }
        }
    }

    pub fn on_worker_event(&mut self, event: WorkerEvent) {
        let WorkerEvent { request_id, kind } = event;
        match kind {
            WorkerEventKind::Progress(value) => {
                self.dispatch(SummarizeIntent::Progress { request_id, value })
            }
            WorkerEventKind::Finished(outcome) => {
                self.dispatch(SummarizeIntent::Finished {
                    request_id,
                    outcome,
                })
            }
        }
    }

    fn dispatch(&mut self, intent: SummarizeIntent) {
        dispatch_mvi!(self, panel, SummarizeReducer, intent);
    }
}
