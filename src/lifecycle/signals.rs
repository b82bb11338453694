//! OS signal handling.
//!
//! Translates SIGINT and SIGTERM into the internal shutdown broadcast so
//! the server drains in-flight requests before exiting.

use crate::lifecycle::Shutdown;

/// Wait for a termination signal, then trigger shutdown.
///
/// Spawned once at startup; resolves after triggering.
pub async fn shutdown_on_signal(shutdown: Shutdown) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Termination signal received");
    shutdown.trigger();
}
