//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Returns every violation, not just the first, so an operator can fix a
//! config in one pass.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic violation in a parsed config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.server_name must not be empty")]
    EmptyServerName,

    #[error("fetch.max_size must be greater than zero")]
    ZeroMaxSize,

    #[error("fetch.connect_timeout_secs must be greater than zero")]
    ZeroConnectTimeout,

    #[error("fetch.request_timeout_secs must be greater than zero")]
    ZeroFetchTimeout,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.metrics_address `{0}` is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("static_files.root must not be empty when static files are enabled")]
    EmptyStaticRoot,
}

/// Validate a parsed configuration, collecting all violations.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.server_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServerName);
    }

    if config.fetch.max_size == 0 {
        errors.push(ValidationError::ZeroMaxSize);
    }
    if config.fetch.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }
    if config.fetch.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroFetchTimeout);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.static_files.enabled && config.static_files.root.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticRoot);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
