//! Launch screen feature module.
//!
//! A decorative rocket that launches and lands, either from key presses or
//! from the pitch signal.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Launched flag and image
//! - `action.rs` - Launch/Land and motion subscription control
//! - `reducer.rs` - State transitions
//! - `environment.rs` - Pitch subscription runner
//! - `animation.rs` - Vertical travel used by the view

mod action;
mod animation;
mod environment;
mod reducer;
mod state;

pub use action::{
    pitch_action, RocketLaunchAction, RocketLaunchTask, LAUNCH_PITCH_THRESHOLD, MOTION_UPDATES,
};
pub use animation::{rocket_center_y, LaunchAnimation, LAUNCH_DURATION, OVERSHOOT};
pub use environment::RocketLaunchEnvironment;
pub use reducer::RocketLaunchReducer;
pub use state::{RocketImage, RocketLaunchState};
