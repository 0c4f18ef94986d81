//! Reducer for the rocket detail screen.

use crate::ui::mvi::{Effect, Reducer};

use super::action::{RocketDetailAction, RocketDetailTask};
use super::state::RocketDetailState;

pub struct RocketDetailReducer;

impl Reducer for RocketDetailReducer {
    type State = RocketDetailState;
    type Action = RocketDetailAction;
    type Task = RocketDetailTask;

    fn reduce(
        mut state: Self::State,
        action: Self::Action,
    ) -> (Self::State, Effect<Self::Task>) {
        match action {
            RocketDetailAction::ToggleUnits => {
                state.units = state.units.toggled();
                (state, Effect::None)
            }
        }
    }
}
