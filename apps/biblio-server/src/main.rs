//! # Biblio Server
//!
//! ## Usage
//! ```bash
//! cargo run -p biblio-server
//! cargo run -p biblio-server -- --config ./server.toml
//! RUST_LOG=debug BIBLIO_PORT=50052 cargo run -p biblio-server
//! ```

use std::path::PathBuf;

use biblio_server::{build_service, ServerConfig, ServerError, DEFAULT_LOG_FILTER};
use tonic::transport::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_args();
    if let Some(ref path) = config_path {
        info!(?path, "Using config file from command line");
    }

    info!("Starting Biblio server...");

    let config = ServerConfig::load(config_path).map_err(ServerError::from)?;
    let addr = config.socket_addr();
    info!(
        %addr,
        store = %config.store.path.display(),
        "Configuration loaded"
    );

    let service = build_service(&config).await?;

    info!(%addr, "Starting gRPC server");

    Server::builder()
        .add_service(service)
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .map_err(ServerError::from)?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=biblio_store=trace` - Trace the store only
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Reads `--config <path>` from the command line.
fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => tracing::warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    config_path
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
