//! Fetch error types
//!
//! Failures of the single metrics request. The display string is what the
//! page shows to the user, unchanged.

use thiserror::Error;

/// Errors returned by a metrics fetch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, ...
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete in the configured time
    #[error("Request timed out")]
    Timeout,

    /// The backend answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a metrics document
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
