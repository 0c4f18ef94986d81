//! Reducer for the launch screen.

use crate::ui::mvi::{Effect, Reducer};

use super::action::{RocketLaunchAction, RocketLaunchTask, MOTION_UPDATES};
use super::state::{RocketImage, RocketLaunchState};

pub struct RocketLaunchReducer;

impl Reducer for RocketLaunchReducer {
    type State = RocketLaunchState;
    type Action = RocketLaunchAction;
    type Task = RocketLaunchTask;

    fn reduce(
        state: Self::State,
        action: Self::Action,
    ) -> (Self::State, Effect<Self::Task>) {
        match action {
            RocketLaunchAction::StartMotionUpdates => (
                state,
                Effect::run(MOTION_UPDATES, RocketLaunchTask::MotionUpdates),
            ),
            RocketLaunchAction::StopMotionUpdates => (state, Effect::Cancel(MOTION_UPDATES)),
            RocketLaunchAction::Launch => (
                RocketLaunchState {
                    is_launched: true,
                    image: RocketImage::Flying,
                },
                Effect::None,
            ),
            RocketLaunchAction::Land => (
                RocketLaunchState {
                    is_launched: false,
                    image: RocketImage::Idle,
                },
                Effect::None,
            ),
        }
    }
}
