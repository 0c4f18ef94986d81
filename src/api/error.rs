//! Errors reported by the rockets fetch.

use thiserror::Error;

/// Why a rockets fetch produced no records.
///
/// Kept as plain strings so the value can live in screen state and be
/// compared and cloned like any other state field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, TLS or body transfer failure.
    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    /// Request did not finish in time.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status.
    #[error("Server returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not a JSON array of rockets.
    #[error("Failed to decode rockets: {message}")]
    Decode { message: String },

    /// Fetch stopped without producing a result.
    #[error("Rockets fetch was interrupted")]
    Interrupted,
}

impl FetchError {
    /// Short label for logs and the status line.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport_error",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode { .. } => "decode_error",
            FetchError::Interrupted => "interrupted",
        }
    }
}
