//! Base trait for slice state.

/// Marker trait for state owned by the store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a subscriber needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
