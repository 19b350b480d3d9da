//! Fetch error types.

use thiserror::Error;

/// Errors that can occur fetching the catalog.
///
/// A fetch failure is surfaced as-is; the pipeline never renders a failed
/// fetch as an empty catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Failed to parse the response body.
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
