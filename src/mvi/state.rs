//! Marker trait for reducer-owned state.

/// State driven by a [`Reducer`](super::Reducer).
///
/// `Default` is the initial state and the target of a reset;
/// `PartialEq` lets callers detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
