//! url-relay service binary.
//!
//! ```text
//!   Client ──▶ GET /?url=…  (Referer: https://<server_name>/…)
//!                 │
//!                 ▼
//!          ┌─────────────┐      bounded GET       ┌────────┐
//!          │  url-relay  │ ─────────────────────▶ │ remote │
//!          │  validate → │ ◀───── chunks ≤ cap ── │ server │
//!          │  fetch      │                        └────────┘
//!          └─────────────┘
//!                 │
//!                 ▼
//!   Client ◀── status + body (fetched bytes, or terminal error)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use url_relay::config;
use url_relay::http::HttpServer;
use url_relay::lifecycle::{signals, Shutdown};
use url_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "url-relay")]
#[command(about = "Referer-gated, size-capped URL relay", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::default_config()?,
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        server_name = %config.listener.server_name,
        max_size = config.fetch.max_size,
        fetch_enabled = config.fetch.enabled,
        static_files = config.static_files.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
