use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

/// Rockets endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host of the API (e.g., "https://api.spacexdata.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Pitch sensor settings for the launch screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Which sensor feeds the launch screen (default: manual).
    #[serde(default)]
    pub source: MotionSourceKind,
    /// Sampling interval in milliseconds (default: 100).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Start motion updates when the launch screen opens (default: true).
    #[serde(default = "default_auto_start")]
    pub auto_start: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MotionSourceKind {
    /// Pitch is tilted with the arrow keys.
    #[default]
    Manual,
    /// Pitch swings on its own.
    Simulated,
    /// No sensor; motion updates are a no-op.
    None,
}

fn default_base_url() -> String {
    "https://api.spacexdata.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_interval_ms() -> u64 {
    100
}

fn default_auto_start() -> bool {
    true
}

impl ApiConfig {
    /// Full URL of the rockets listing.
    pub fn rockets_url(&self) -> String {
        format!("{}/v3/rockets", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            source: MotionSourceKind::default(),
            interval_ms: default_interval_ms(),
            auto_start: default_auto_start(),
        }
    }
}
