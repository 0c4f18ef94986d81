//! Actions for the launch screen.

use crate::ui::mvi::{Action, EffectId, Task};

/// Pitch (radians) below which the rocket lands.
pub const LAUNCH_PITCH_THRESHOLD: f64 = 0.2;

/// Effect id of the pitch subscription.
pub const MOTION_UPDATES: EffectId = EffectId::new("motion-updates");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketLaunchAction {
    /// Subscribe to pitch samples; each one becomes `Launch` or `Land`.
    StartMotionUpdates,

    /// End the pitch subscription. No sample is applied afterwards.
    StopMotionUpdates,

    Launch,

    Land,
}

impl Action for RocketLaunchAction {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketLaunchTask {
    /// Long-lived pitch subscription.
    MotionUpdates,
}

impl Task for RocketLaunchTask {}

/// Map one pitch sample to the action it triggers.
pub fn pitch_action(pitch: f64) -> RocketLaunchAction {
    if pitch < LAUNCH_PITCH_THRESHOLD {
        RocketLaunchAction::Land
    } else {
        RocketLaunchAction::Launch
    }
}
