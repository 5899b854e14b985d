//! Base trait for dispatchable actions.

/// Marker trait for action objects.
///
/// Actions represent:
/// - Settled or pending gateway results
/// - Slice resets
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
