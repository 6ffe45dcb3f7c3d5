//! Custom error types for the application.
//!
//! The browser has a single failure class worth surfacing: the structure
//! document could not be loaded. A navigation path that does not resolve is
//! not an error; the resolver simply yields no entries.

use thiserror::Error;

/// Failure to fetch or parse the structure document.
///
/// Fatal to the whole view: the caller renders the message inline and never
/// retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error! status: {0} - is the structure document generated and deployed?")]
    Http(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseRead,
    /// Payload is not a well-formed node sequence
    #[error("Malformed structure document: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
