//! Marker trait for intents.

/// A discrete user action handed to a reducer.
///
/// Intents carry only the data needed for the transition (which digit,
/// which operation); they never hold references into state.
pub trait Intent: Send + 'static {}
