//! Read-only client for the rockets endpoint.

mod client;
mod error;

pub use client::{HttpRocketsProvider, RocketsProvider};
pub use error::FetchError;
