//! Rocket detail screen feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Selected rocket and display units
//! - `action.rs` - User actions
//! - `reducer.rs` - State transitions

mod action;
mod reducer;
mod state;

pub use action::{RocketDetailAction, RocketDetailTask};
pub use reducer::RocketDetailReducer;
pub use state::{RocketDetailState, UnitSystem};
