//! Errors returned by `TodoClient` parse methods.
//!
//! `NotFound` has its own variant because callers routinely branch on it;
//! every other unexpected status lands in `Http` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: no todo with that id.
    #[error("todo not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// The server's `{"code", "message"}` body, when an `Http` error carries one.
    pub fn error_body(&self) -> Option<crate::types::ErrorBody> {
        match self {
            Self::Http { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}
