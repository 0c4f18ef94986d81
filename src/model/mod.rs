//! Rocket records as served by the `/v3/rockets` endpoint.

mod lenient;
mod rocket;

pub use rocket::{
    CompositeFairing, Dimensions, Engines, FirstStage, Isp, LandingLegs, Mass, PayloadOptions,
    PayloadWeight, Rocket, RocketStage, SecondStage, Thrust,
};

#[cfg(test)]
pub(crate) use rocket::fixture_rockets;
