//! Rocket list feature module.
//!
//! Root screen: fetches the rocket catalogue and owns the navigation stack
//! of detail and launch screens pushed on top of it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Records, loading flag, error and navigation path
//! - `action.rs` - Load cycle, navigation and routed child actions
//! - `destination.rs` - Child screens and their combined reducer
//! - `reducer.rs` - State transitions
//! - `environment.rs` - Fetch and child effect runner

mod action;
mod destination;
mod environment;
mod reducer;
mod state;

pub use action::{RocketListAction, RocketListTask, FETCH_ROCKETS};
pub use destination::{Destination, DestinationAction, DestinationReducer, DestinationTask};
pub use environment::RocketListEnvironment;
pub use reducer::RocketListReducer;
pub use state::{LoadStatus, RocketListState};
