//! Error types for the paraphrase client.
//!
//! The UI collapses every variant to one fixed placeholder string; the
//! distinction only exists for the diagnostic log.

use thiserror::Error;

/// Errors that can occur while performing a paraphrase request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused,
    /// DNS failure, connect timeout).
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body was not the expected JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}
