//! Terminal states of a relay request, mapped onto client-facing responses.
//!
//! Every failure is surfaced verbatim as the HTTP response; nothing is
//! recovered locally and nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::fetch::FetchError;

/// Everything that can end a relay request short of a relayed body.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The `url` parameter was missing or not a well-formed absolute URL.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The referer was absent or its host does not name this server.
    #[error("Forbidden")]
    Forbidden,

    /// The outbound transfer failed; carries the transport's own message.
    #[error("{0}")]
    Transport(String),

    /// The remote body would exceed the configured byte ceiling.
    #[error("File too large")]
    TooLarge,

    /// The transfer completed without delivering a single byte.
    #[error("Empty answer")]
    EmptyAnswer,

    /// The outbound fetcher is disabled; no capability to fetch.
    #[error("Service Unavailable")]
    Unavailable,
}

impl RelayError {
    /// Status code this terminal state answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Forbidden => StatusCode::FORBIDDEN,
            RelayError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::InvalidUrl
            | RelayError::Transport(_)
            | RelayError::TooLarge
            | RelayError::EmptyAnswer => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable label for metrics, one per terminal state.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::InvalidUrl => "invalid_url",
            RelayError::Forbidden => "forbidden",
            RelayError::Transport(_) => "transport_error",
            RelayError::TooLarge => "too_large",
            RelayError::EmptyAnswer => "empty_answer",
            RelayError::Unavailable => "unavailable",
        }
    }
}

impl From<FetchError> for RelayError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(message) => RelayError::Transport(message),
            FetchError::TooLarge => RelayError::TooLarge,
            FetchError::Empty => RelayError::EmptyAnswer,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
