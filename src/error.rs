//! Error types for upstream fetches.
//!
//! Every variant means the same thing to a tool: the data is unavailable.
//! The kinds exist so the logs can say why.

use reqwest::StatusCode;
use thiserror::Error;

/// A specialized Result type for upstream fetches.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Reasons an upstream document could not be obtained.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built.
    #[error("Client setup failed: {0}")]
    Client(String),

    /// The request URL could not be assembled.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection failure or timeout.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned HTTP {0}")]
    Status(StatusCode),

    /// Body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether the failure happened before anything reached the network.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Client(_) | Self::InvalidUrl(_))
    }
}
