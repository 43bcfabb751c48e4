//! GitGrade - Main application entry point
//!
//! This application starts the HTTP API server.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::{net::TcpListener, signal};

use gitgrade::{Config, create_app, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Load and validate configuration
    let config = Config::load()
        .context("Failed to load configuration. Check config/*.toml and GITGRADE__* env vars")?;

    // Initialize tracing (after config is loaded so we can use logging config)
    init_tracing(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Starting GitGrade server...");
    tracing::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid server host '{}'", config.server.host))?,
        config.server.port,
    );

    let router = create_app(&config);

    tracing::info!("Server listening on {}", addr);
    if config.server.enable_docs {
        tracing::info!(
            "OpenAPI document available at http://{}/api-docs/openapi.json",
            addr
        );
    }

    // Start server with graceful shutdown
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
