//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// No engines configured.
    #[error("No search engines configured")]
    NoEngines,

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
