//! Screens that can be pushed on top of the rocket list.

use crate::ui::mvi::{Action, Effect, Reducer, ScreenState, Task};
use crate::ui::rocket_detail::{
    RocketDetailAction, RocketDetailReducer, RocketDetailState, RocketDetailTask,
};
use crate::ui::rocket_launch::{
    RocketLaunchAction, RocketLaunchReducer, RocketLaunchState, RocketLaunchTask,
};

/// State of one pushed frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Detail(RocketDetailState),
    Launch(RocketLaunchState),
}

impl ScreenState for Destination {}

/// Action for one pushed frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationAction {
    Detail(RocketDetailAction),
    Launch(RocketLaunchAction),
}

impl Action for DestinationAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationTask {
    Launch(RocketLaunchTask),
}

impl Task for DestinationTask {}

/// Dispatches to the reducer of whichever screen the frame holds.
pub struct DestinationReducer;

impl Reducer for DestinationReducer {
    type State = Destination;
    type Action = DestinationAction;
    type Task = DestinationTask;

    fn reduce(
        state: Self::State,
        action: Self::Action,
    ) -> (Self::State, Effect<Self::Task>) {
        match (state, action) {
            (Destination::Detail(state), DestinationAction::Detail(action)) => {
                let (state, effect) = RocketDetailReducer::reduce(state, action);
                let effect = effect.map(|task: RocketDetailTask| -> DestinationTask { match task {} });
                (Destination::Detail(state), effect)
            }
            (Destination::Launch(state), DestinationAction::Launch(action)) => {
                let (state, effect) = RocketLaunchReducer::reduce(state, action);
                (Destination::Launch(state), effect.map(DestinationTask::Launch))
            }
            // Frame ids are never reused, so this is a misrouted action.
            (state, action) => {
                tracing::debug!(action = ?action, "action does not match the frame's screen");
                (state, Effect::None)
            }
        }
    }
}
