//! State side of the MVI loop.

/// Marker trait for a UI panel's state.
///
/// States are plain values: the reducer consumes the old one and returns
/// the next, and the view renders whatever it is handed. `Default` is the
/// state a panel starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
