//! Reducer trait for the MVI loop.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Side effects (clipboard, worker threads) stay in the caller; the reducer
/// only decides what the panel shows next.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
