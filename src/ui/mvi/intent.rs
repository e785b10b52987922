//! Intent side of the MVI loop.

/// Marker trait for things that can happen to a panel.
///
/// Intents come from the user (key presses, clicks) and from the system
/// (worker outcomes, ticks). Only a reducer turns them into state.
pub trait Intent: Send + 'static {}
