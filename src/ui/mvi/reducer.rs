//! Reducer trait for MVI architecture.

use super::action::Action;
use super::effect::{Effect, Task};
use super::state::ScreenState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> (State, Effect).
/// Async work is returned as an [`Effect`] value and run by the store.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ScreenState;

    /// The action type this reducer handles.
    type Action: Action;

    /// The async work this reducer can request.
    type Task: Task;

    /// Process an action and return the new state plus follow-up work.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, action: Self::Action) -> (Self::State, Effect<Self::Task>);
}
