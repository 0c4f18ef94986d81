//! Actions for the rocket detail screen.

use crate::ui::mvi::{Action, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketDetailAction {
    /// Switch parameter tiles between metric and imperial.
    ToggleUnits,
}

impl Action for RocketDetailAction {}

/// The detail screen starts no async work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketDetailTask {}

impl Task for RocketDetailTask {}
