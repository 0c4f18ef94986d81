//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │        Effect                │
//!    │          ↓                   │
//!    └────── Store runs ←───────────┘
//! ```
//!
//! - **State**: Immutable representation of screen state
//! - **Action**: User actions or effect output
//! - **Reducer**: Pure function `(State, Action) -> (State, Effect)`
//! - **Effect**: Description of async work; executed by the [`Store`]

mod action;
mod effect;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use effect::{Effect, EffectId, Task};
pub use reducer::Reducer;
pub use state::ScreenState;
pub use store::{Executor, Store};
