//! Base trait for screen state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait ScreenState: Clone + PartialEq + std::fmt::Debug + Send + 'static {}
