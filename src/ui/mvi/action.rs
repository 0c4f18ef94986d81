//! Base trait for actions in MVI architecture.

/// Marker trait for action values.
///
/// Actions represent:
/// - User actions (key presses, selections)
/// - Effect output (fetch results, sensor samples)
/// - Navigation events
///
/// Actions are plain data: cloneable, printable, no behavior.
/// They are processed by reducers to produce new states.
pub trait Action: Clone + std::fmt::Debug + Send + 'static {}
