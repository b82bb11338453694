//! Fetch failure classification.

use thiserror::Error;

/// Ways a bounded fetch can fail. All are terminal; none are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, refused connection, TLS, timeout).
    /// Carries the transport's own message.
    #[error("{0}")]
    Transport(String),

    /// The remote body would exceed the configured byte ceiling.
    #[error("File too large")]
    TooLarge,

    /// The transfer completed without delivering a single byte.
    #[error("Empty answer")]
    Empty,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
