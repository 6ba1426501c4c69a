// src/main.rs
use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use estoque_backend::{build_app, config::Config, database, logging, AppState};

const PORT_ATTEMPTS: u16 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    logging::init();

    let config = Config::from_env()?;

    // Connect the store and make sure the table exists
    let store = database::connect(&config).await?;
    let app_state = AppState::new(store.clone(), config.stock_retry_attempts);
    let app = build_app(app_state);

    let listener = bind_listener(config.host, config.port).await?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Shutdown hook: release database connections
    store.close().await;
    tracing::info!("Server stopped");

    served.map_err(Into::into)
}

/// Binds the first free port in `port..=port + PORT_ATTEMPTS`.
async fn bind_listener(host: IpAddr, port: u16) -> Result<TcpListener> {
    let last = port.saturating_add(PORT_ATTEMPTS);
    for candidate in port..=last {
        let addr = SocketAddr::from((host, candidate));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if candidate != port {
                    tracing::warn!(requested = port, bound = candidate, "Ports {port}..{candidate} busy, using fallback");
                }
                tracing::info!(%addr, "Server running");
                return Ok(listener);
            }
            Err(e) => tracing::debug!(%addr, error=%e, "Port unavailable"),
        }
    }
    anyhow::bail!("No free port in {port}..={last} on {host}")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error=%e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                tracing::error!(error=%e, "Failed to listen for SIGTERM");
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
    tracing::info!("Shutdown signal received");
}
