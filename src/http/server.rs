//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the axum Router with the relay handler
//! - Wire up middleware (timeout, request ID, tracing)
//! - Serve with graceful shutdown
//! - Run the per-request pipeline: parse → validate → bounded fetch → emit

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Extension, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use url::Url;

use crate::config::RelayConfig;
use crate::fetch::BoundedFetcher;
use crate::http::request::{RequestId, RequestIdLayer};
use crate::http::response::RelayError;
use crate::observability::metrics;
use crate::security::referer_allowed;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound fetcher; `None` when fetching is disabled by config.
    pub fetcher: Option<Arc<BoundedFetcher>>,

    /// Name the referer's host must contain.
    pub server_name: Arc<str>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the outbound client cannot be constructed.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let fetcher = if config.fetch.enabled {
            Some(Arc::new(BoundedFetcher::new(&config.fetch)?))
        } else {
            None
        };

        let state = AppState {
            fetcher,
            server_name: config.listener.server_name.as_str().into(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let mut router = Router::new().route("/", any(relay_handler));

        if config.static_files.enabled {
            router = router.fallback_service(ServeDir::new(&config.static_files.root));
        }

        router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Relay endpoint handler.
///
/// Accepts any method. Every terminal state produces exactly one response
/// and one metrics sample; the only other observable effect is the single
/// outbound fetch.
async fn relay_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let method_str = method.to_string();

    tracing::debug!(
        request_id = %request_id.as_str(),
        method = %method,
        "Relay request received"
    );

    let target = target_from_query(uri.query());
    match run_relay(&state, target, &headers).await {
        Ok(body) => {
            tracing::debug!(
                request_id = %request_id.as_str(),
                bytes = body.len(),
                "Relayed remote content"
            );
            metrics::record_request(&method_str, StatusCode::OK.as_u16(), "success", start_time);
            (StatusCode::OK, body).into_response()
        }
        Err(err) => {
            tracing::warn!(
                request_id = %request_id.as_str(),
                outcome = err.outcome(),
                error = %err,
                "Relay request failed"
            );
            metrics::record_request(&method_str, err.status().as_u16(), err.outcome(), start_time);
            err.into_response()
        }
    }
}

/// The strictly sequential pipeline: URL syntax, referer policy, capability,
/// bounded fetch.
async fn run_relay(
    state: &AppState,
    target: Option<String>,
    headers: &HeaderMap,
) -> Result<Vec<u8>, RelayError> {
    let url = target
        .as_deref()
        .and_then(parse_target_url)
        .ok_or(RelayError::InvalidUrl)?;

    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());
    if !referer_allowed(referer, &state.server_name) {
        return Err(RelayError::Forbidden);
    }

    let Some(fetcher) = &state.fetcher else {
        return Err(RelayError::Unavailable);
    };

    Ok(fetcher.fetch(&url).await?)
}

/// Extract the `url` parameter from a raw query string. First occurrence
/// wins; percent-encoding is undone.
fn target_from_query(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}

/// Parse the target as a well-formed absolute URL carrying a host.
fn parse_target_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    if !url.has_host() {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_http_urls_are_accepted() {
        assert!(parse_target_url("https://example.com/a.txt").is_some());
        assert!(parse_target_url("http://127.0.0.1:8000/file").is_some());
    }

    #[test]
    fn relative_and_malformed_urls_are_rejected() {
        assert!(parse_target_url("not-a-url").is_none());
        assert!(parse_target_url("/relative/path").is_none());
        assert!(parse_target_url("").is_none());
    }

    #[test]
    fn host_less_urls_are_rejected() {
        assert!(parse_target_url("data:text/plain,hi").is_none());
        assert!(parse_target_url("mailto:user@example.com").is_none());
    }

    #[test]
    fn first_url_parameter_wins() {
        assert_eq!(
            target_from_query(Some("url=http%3A%2F%2Fa.example%2F&url=http://b.example/")),
            Some("http://a.example/".to_string())
        );
    }

    #[test]
    fn absent_query_or_parameter_yields_none() {
        assert_eq!(target_from_query(None), None);
        assert_eq!(target_from_query(Some("other=1")), None);
    }
}
