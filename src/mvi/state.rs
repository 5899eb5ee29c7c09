//! Base trait for state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + 'static {}

impl State for i64 {}
impl State for String {}
