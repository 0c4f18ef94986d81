//! Application configuration: TOML file plus command-line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, MotionConfig, MotionSourceKind};
