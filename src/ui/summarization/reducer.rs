//! Reducer for the summary panel.

use crate::summarize::SummaryOutcome;
use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::state::{PanelStatus, SummaryPanelState, BUSY_NOTICE};

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = SummaryPanelState;
    type Intent = SummarizeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Progress is deliberately left alone here.
            SummarizeIntent::ClipboardEmpty if !state.is_busy() => SummaryPanelState {
                status: PanelStatus::ClipboardEmpty,
                notice: None,
                scroll: 0,
                ..state
            },
            SummarizeIntent::ClipboardEmpty => state,

            SummarizeIntent::Started { request_id } => SummaryPanelState {
                status: PanelStatus::Summarizing {
                    request_id,
                    animation_tick: 0,
                },
                progress: 0,
                notice: None,
                scroll: 0,
            },

            SummarizeIntent::Rejected => SummaryPanelState {
                notice: Some(BUSY_NOTICE.to_string()),
                ..state
            },

            SummarizeIntent::Progress { request_id, value } => {
                if state.in_flight() != Some(request_id) {
                    return state;
                }
                SummaryPanelState {
                    progress: value.min(100),
                    ..state
                }
            }

            SummarizeIntent::Finished {
                request_id,
                outcome,
            } => {
                if state.in_flight() != Some(request_id) {
                    tracing::debug!(request_id = %request_id, "Dropping outcome for stale request");
                    return state;
                }
                let (status, progress) = match outcome {
                    SummaryOutcome::Summary(text) => (PanelStatus::Summary(text), 100),
                    SummaryOutcome::Error(text) => (PanelStatus::Error(text), 0),
                };
                SummaryPanelState {
                    status,
                    progress,
                    notice: None,
                    scroll: 0,
                }
            }

            SummarizeIntent::AnimationTick => match state.status {
                PanelStatus::Summarizing {
                    request_id,
                    animation_tick,
                } => SummaryPanelState {
                    status: PanelStatus::Summarizing {
                        request_id,
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    ..state
                },
                _ => state,
            },

            SummarizeIntent::Scroll { lines } => {
                let scroll = (state.scroll as i32 + lines as i32).clamp(0, u16::MAX as i32) as u16;
                SummaryPanelState { scroll, ..state }
            }
        }
    }
}
