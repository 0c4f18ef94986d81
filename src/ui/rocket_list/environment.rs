//! Runs the rocket list's effects, including those of pushed screens.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::stream::{self, BoxStream};
use futures::{FutureExt, StreamExt};

use crate::api::{FetchError, RocketsProvider};
use crate::ui::mvi::Executor;
use crate::ui::navigation::PathAction;
use crate::ui::rocket_launch::RocketLaunchEnvironment;

use super::action::{RocketListAction, RocketListTask};
use super::destination::{DestinationAction, DestinationTask};

/// Dependencies of the list screen and its destinations.
#[derive(Clone)]
pub struct RocketListEnvironment {
    rockets: Arc<dyn RocketsProvider>,
    launch: RocketLaunchEnvironment,
}

impl RocketListEnvironment {
    pub fn new(rockets: Arc<dyn RocketsProvider>, launch: RocketLaunchEnvironment) -> Self {
        Self { rockets, launch }
    }
}

impl Executor<RocketListTask, RocketListAction> for RocketListEnvironment {
    fn execute(&self, task: RocketListTask) -> BoxStream<'static, RocketListAction> {
        match task {
            RocketListTask::FetchRockets => {
                let fetch = AssertUnwindSafe(self.rockets.fetch()).catch_unwind();
                stream::once(async move {
                    let result = fetch.await.unwrap_or(Err(FetchError::Interrupted));
                    match result {
                        Ok(rockets) => RocketListAction::LoadCompleted {
                            rockets,
                            error: None,
                        },
                        Err(error) => {
                            tracing::warn!(
                                error = %error,
                                error_type = error.error_type(),
                                "rockets fetch failed"
                            );
                            RocketListAction::LoadCompleted {
                                rockets: Vec::new(),
                                error: Some(error),
                            }
                        }
                    }
                })
                .boxed()
            }

            RocketListTask::Destination(id, DestinationTask::Launch(task)) => self
                .launch
                .execute(task)
                .map(move |action| {
                    RocketListAction::Path(PathAction::Element {
                        id,
                        action: DestinationAction::Launch(action),
                    })
                })
                .boxed(),
        }
    }
}
