//! Summary panel feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - label/gauge state and the request slot
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SummarizeIntent;
pub use reducer::SummarizeReducer;
pub use state::{
    PanelStatus, SummaryPanelState, BUSY_NOTICE, EMPTY_CLIPBOARD_LABEL, INITIAL_LABEL,
    SUMMARIZING_LABEL,
};
pub use view::{render_summary_panel, BUTTON_LABEL};
