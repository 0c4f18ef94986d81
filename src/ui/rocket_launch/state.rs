//! State for the launch screen.

use crate::ui::mvi::ScreenState;

/// Which rocket picture the launch screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RocketImage {
    #[default]
    Idle,
    Flying,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RocketLaunchState {
    pub is_launched: bool,
    /// Follows `is_launched`; kept in state so views need no logic.
    pub image: RocketImage,
}

impl ScreenState for RocketLaunchState {}
