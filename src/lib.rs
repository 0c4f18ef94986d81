//! Rocket catalogue terminal app.
//!
//! The reusable core is the unidirectional store in [`ui::mvi`] (pure
//! reducers, effects as data, cancellable effect runs) and the
//! [`ui::navigation`] stack built on it.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod motion;
pub mod ui;
