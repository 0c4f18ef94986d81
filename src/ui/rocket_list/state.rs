//! State for the rocket list screen.

use crate::api::FetchError;
use crate::model::Rocket;
use crate::ui::mvi::ScreenState;
use crate::ui::navigation::NavigationStack;

use super::destination::Destination;

/// Where the list is in its load cycle.
///
/// `Idle → Loading → (Loaded | Failed)`; the next `Load` re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Root screen state: fetched rockets plus the stack of pushed screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RocketListState {
    pub rockets: Vec<Rocket>,
    /// True only while a fetch is outstanding.
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub path: NavigationStack<Destination>,
}

impl ScreenState for RocketListState {}

impl RocketListState {
    pub fn status(&self) -> LoadStatus {
        if self.is_loading {
            LoadStatus::Loading
        } else if self.error.is_some() {
            LoadStatus::Failed
        } else if !self.rockets.is_empty() {
            LoadStatus::Loaded
        } else {
            LoadStatus::Idle
        }
    }
}
