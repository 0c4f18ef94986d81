//! Rocket list reducer.

use crate::ui::mvi::{Effect, Reducer};
use crate::ui::navigation::{Frame, PathAction};
use crate::ui::rocket_detail::RocketDetailState;
use crate::ui::rocket_launch::RocketLaunchState;

use super::action::{RocketListAction, RocketListTask, FETCH_ROCKETS};
use super::destination::{Destination, DestinationReducer};
use super::state::RocketListState;

pub struct RocketListReducer;

impl Reducer for RocketListReducer {
    type State = RocketListState;
    type Action = RocketListAction;
    type Task = RocketListTask;

    fn reduce(
        mut state: Self::State,
        action: Self::Action,
    ) -> (Self::State, Effect<Self::Task>) {
        match action {
            RocketListAction::Load => {
                state.rockets.clear();
                state.is_loading = true;
                state.error = None;
                (state, Effect::run(FETCH_ROCKETS, RocketListTask::FetchRockets))
            }

            RocketListAction::LoadCompleted { rockets, error } => {
                state.rockets = rockets;
                state.error = error;
                state.is_loading = false;
                (state, Effect::None)
            }

            RocketListAction::OpenDetail(rocket) => {
                state
                    .path
                    .push(Destination::Detail(RocketDetailState::new(rocket)));
                (state, Effect::None)
            }

            RocketListAction::OpenLaunch => {
                state
                    .path
                    .push(Destination::Launch(RocketLaunchState::default()));
                (state, Effect::None)
            }

            RocketListAction::Path(PathAction::Element { id, action }) => {
                let effect = match state.path.route::<DestinationReducer>(id, action) {
                    Some(effect) => effect
                        .map(move |task| RocketListTask::Destination(id, task))
                        .scoped(id),
                    None => {
                        tracing::debug!(frame = %id, "action for a popped frame ignored");
                        Effect::None
                    }
                };
                (state, effect)
            }

            RocketListAction::Path(PathAction::Pop) => {
                let effect = state.path.pop().map(release).unwrap_or(Effect::None);
                (state, effect)
            }

            RocketListAction::Path(PathAction::PopTo { id }) => {
                let effect = state.path.pop_to(id).into_iter().map(release).collect();
                (state, effect)
            }

            RocketListAction::Path(PathAction::PopToRoot) => {
                let effect = state.path.pop_to_root().into_iter().map(release).collect();
                (state, effect)
            }
        }
    }
}

/// Stop whatever the removed frame still has running.
fn release(frame: Frame<Destination>) -> Effect<RocketListTask> {
    Effect::CancelFrame(frame.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::model::fixture_rockets;
    use crate::ui::rocket_detail::{RocketDetailAction, UnitSystem};
    use crate::ui::rocket_launch::{RocketLaunchAction, RocketLaunchTask, MOTION_UPDATES};
    use crate::ui::rocket_list::{DestinationAction, DestinationTask};

    fn reduce(state: RocketListState, action: RocketListAction) -> RocketListState {
        RocketListReducer::reduce(state, action).0
    }

    #[test]
    fn load_resets_and_fetches() {
        let state = RocketListState {
            rockets: fixture_rockets(),
            error: Some(FetchError::Timeout { duration: 30 }),
            ..Default::default()
        };
        let (state, effect) = RocketListReducer::reduce(state, RocketListAction::Load);
        assert!(state.rockets.is_empty());
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(effect, Effect::run(FETCH_ROCKETS, RocketListTask::FetchRockets));
    }

    #[test]
    fn load_completed_sets_fields_verbatim() {
        let loading = reduce(RocketListState::default(), RocketListAction::Load);
        let completed = RocketListAction::LoadCompleted {
            rockets: fixture_rockets(),
            error: None,
        };

        let (once, effect) = RocketListReducer::reduce(loading, completed.clone());
        assert!(effect.is_none());
        assert!(!once.is_loading);
        assert_eq!(once.rockets, fixture_rockets());

        let twice = reduce(once.clone(), completed);
        assert_eq!(twice, once);
    }

    #[test]
    fn load_completed_with_error() {
        let error = FetchError::Status {
            url: "http://localhost/v3/rockets".into(),
            status: 503,
        };
        let state = reduce(
            RocketListState::default(),
            RocketListAction::LoadCompleted {
                rockets: Vec::new(),
                error: Some(error.clone()),
            },
        );
        assert!(state.rockets.is_empty());
        assert_eq!(state.error, Some(error));
    }

    #[test]
    fn reduce_is_deterministic() {
        let actions = [
            RocketListAction::Load,
            RocketListAction::LoadCompleted {
                rockets: fixture_rockets(),
                error: None,
            },
            RocketListAction::OpenDetail(fixture_rockets().remove(0)),
            RocketListAction::OpenLaunch,
        ];
        for action in actions {
            let state = RocketListState::default();
            assert_eq!(
                RocketListReducer::reduce(state.clone(), action.clone()),
                RocketListReducer::reduce(state, action)
            );
        }
    }

    #[test]
    fn open_detail_then_pop_restores_stack() {
        let before = reduce(
            RocketListState::default(),
            RocketListAction::LoadCompleted {
                rockets: fixture_rockets(),
                error: None,
            },
        );
        let opened = reduce(
            before.clone(),
            RocketListAction::OpenDetail(fixture_rockets().remove(1)),
        );
        assert_eq!(opened.path.len(), 1);

        let frame = opened.path.id_at(0).unwrap();
        let (after, effect) =
            RocketListReducer::reduce(opened, RocketListAction::Path(PathAction::Pop));
        assert_eq!(after, before);
        assert_eq!(effect, Effect::CancelFrame(frame));
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let (state, effect) = RocketListReducer::reduce(
            RocketListState::default(),
            RocketListAction::Path(PathAction::Pop),
        );
        assert_eq!(state, RocketListState::default());
        assert!(effect.is_none());
    }

    #[test]
    fn element_action_reaches_frame_and_scopes_effect() {
        let state = reduce(RocketListState::default(), RocketListAction::OpenLaunch);
        let id = state.path.id_at(0).unwrap();

        let (state, effect) = RocketListReducer::reduce(
            state,
            RocketListAction::Path(PathAction::Element {
                id,
                action: DestinationAction::Launch(RocketLaunchAction::StartMotionUpdates),
            }),
        );
        assert_eq!(
            effect,
            Effect::run(
                MOTION_UPDATES.scoped(id),
                RocketListTask::Destination(
                    id,
                    DestinationTask::Launch(RocketLaunchTask::MotionUpdates)
                )
            )
        );

        let state = reduce(
            state,
            RocketListAction::Path(PathAction::Element {
                id,
                action: DestinationAction::Launch(RocketLaunchAction::Launch),
            }),
        );
        assert_eq!(
            state.path.get(id),
            Some(&Destination::Launch(RocketLaunchState {
                is_launched: true,
                image: crate::ui::rocket_launch::RocketImage::Flying,
            }))
        );
    }

    #[test]
    fn element_action_for_popped_frame_is_ignored() {
        let state = reduce(
            RocketListState::default(),
            RocketListAction::OpenDetail(fixture_rockets().remove(0)),
        );
        let gone = state.path.id_at(0).unwrap();
        let state = reduce(state, RocketListAction::Path(PathAction::Pop));
        let state = reduce(state, RocketListAction::OpenDetail(fixture_rockets().remove(1)));

        let (after, effect) = RocketListReducer::reduce(
            state.clone(),
            RocketListAction::Path(PathAction::Element {
                id: gone,
                action: DestinationAction::Detail(RocketDetailAction::ToggleUnits),
            }),
        );
        assert_eq!(after, state);
        assert!(effect.is_none());
    }

    #[test]
    fn toggle_units_on_detail_frame() {
        let state = reduce(
            RocketListState::default(),
            RocketListAction::OpenDetail(fixture_rockets().remove(1)),
        );
        let id = state.path.id_at(0).unwrap();
        let state = reduce(
            state,
            RocketListAction::Path(PathAction::Element {
                id,
                action: DestinationAction::Detail(RocketDetailAction::ToggleUnits),
            }),
        );
        match state.path.get(id) {
            Some(Destination::Detail(detail)) => assert_eq!(detail.units, UnitSystem::Imperial),
            other => panic!("unexpected frame: {:?}", other),
        }
    }

    #[test]
    fn pop_to_root_cancels_every_frame() {
        let state = reduce(RocketListState::default(), RocketListAction::OpenLaunch);
        let state = reduce(state, RocketListAction::OpenDetail(fixture_rockets().remove(0)));
        let (lower, upper) = (state.path.id_at(0).unwrap(), state.path.id_at(1).unwrap());

        let (state, effect) =
            RocketListReducer::reduce(state, RocketListAction::Path(PathAction::PopToRoot));
        assert!(state.path.is_empty());
        assert_eq!(
            effect,
            Effect::Batch(vec![Effect::CancelFrame(upper), Effect::CancelFrame(lower)])
        );
    }

    #[test]
    fn pop_to_keeps_target() {
        let state = reduce(RocketListState::default(), RocketListAction::OpenLaunch);
        let target = state.path.id_at(0).unwrap();
        let state = reduce(state, RocketListAction::OpenDetail(fixture_rockets().remove(0)));
        let above = state.path.id_at(1).unwrap();

        let (state, effect) = RocketListReducer::reduce(
            state,
            RocketListAction::Path(PathAction::PopTo { id: target }),
        );
        assert_eq!(state.path.len(), 1);
        assert_eq!(state.path.top().map(Frame::id), Some(target));
        assert_eq!(effect, Effect::CancelFrame(above));
    }
}
