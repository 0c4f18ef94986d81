//! Actions for the rocket list screen.

use crate::api::FetchError;
use crate::model::Rocket;
use crate::ui::mvi::{Action, EffectId, Task};
use crate::ui::navigation::{FrameId, PathAction};

use super::destination::{DestinationAction, DestinationTask};

/// Effect id of the rockets fetch. A new `Load` replaces the running fetch.
pub const FETCH_ROCKETS: EffectId = EffectId::new("fetch-rockets");

#[derive(Debug, Clone, PartialEq)]
pub enum RocketListAction {
    /// Start (or restart) fetching rockets.
    Load,

    /// Fetch finished. Callers supply records or an error, not both.
    LoadCompleted {
        rockets: Vec<Rocket>,
        error: Option<FetchError>,
    },

    /// Push the detail screen for `rocket`.
    OpenDetail(Rocket),

    /// Push the launch screen.
    OpenLaunch,

    /// Navigation, or an action for a pushed screen.
    Path(PathAction<DestinationAction>),
}

impl Action for RocketListAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum RocketListTask {
    FetchRockets,
    /// Work requested by the pushed screen `FrameId`.
    Destination(FrameId, DestinationTask),
}

impl Task for RocketListTask {}
