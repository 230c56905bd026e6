//! Failure taxonomy for backend calls.
//!
//! Every fallible operation in this crate returns [`ApiError`]. The variants
//! separate the layers a request can fail in: the socket, the HTTP status,
//! the JSON decode, the shape of an AI reply, and service-level fallbacks
//! that already carry a user-facing sentence.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("network response was not ok: {reason}")]
    Network {
        status: u16,
        reason: String,
        /// `detail` field from the error body, when the backend sent one.
        detail: Option<String>,
    },

    /// The response body was not valid JSON for the expected type.
    #[error("failed to parse JSON: {0}")]
    Parse(String),

    /// An AI reply decoded but did not have the required shape.
    #[error("{0}")]
    Structure(String),

    /// A domain service failed; the message is already user-facing.
    #[error("{0}")]
    Service(String),
}

impl ApiError {
    /// Text suitable for showing in an error panel.
    ///
    /// Prefers the backend's own `detail` message when one was sent,
    /// otherwise falls back to the display form of the error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}
