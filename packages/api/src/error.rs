//! Error taxonomy for backend calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No usable token, or the backend rejected the one we sent (401/403).
    #[error("not authenticated")]
    Unauthenticated,

    /// The requested resource does not exist (404).
    #[error("resource not found")]
    NotFound,

    /// Any other non-success HTTP status. `detail` is the backend's JSON
    /// `detail` field when present, otherwise the raw response body.
    #[error("request failed with status {status}: {detail}")]
    RequestFailed { status: u16, detail: String },

    /// Client-side input rejected before any network call was issued.
    #[error("{0}")]
    MalformedInput(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Unauthenticated)
    }

    /// User-facing message: server-provided detail text when there is one,
    /// otherwise the caller's fallback string.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::RequestFailed { detail, .. } if !detail.is_empty() => detail.clone(),
            Error::MalformedInput(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
