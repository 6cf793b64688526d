//! Sales Predictor Server - HTTP prediction service
//!
//! Loads the scoring pipeline once, then serves predictions until Ctrl+C or
//! SIGTERM.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=models/sgd_pipeline.json cargo run --bin server -- --port 8000
//! ```
//!
//! # Environment Variables
//! - `APP_HOST` - Bind address (default: 0.0.0.0)
//! - `APP_PORT` - Listen port (default: 8000)
//! - `MODEL_PATH` - Model artifact (default: models/sgd_pipeline.json)
//! - `RUST_LOG` - Log filter (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use sales_predictor::config::Config;
use sales_predictor::domain::ports::SalesModel;
use sales_predictor::infrastructure::load_pipeline;
use sales_predictor::interfaces::{AppState, build_router};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Item sales prediction server", long_about = None)]
struct Cli {
    /// Bind address, overrides APP_HOST
    #[arg(long)]
    host: Option<IpAddr>,

    /// Listen port, overrides APP_PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Model artifact path, overrides MODEL_PATH
    #[arg(short, long)]
    model_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Sales Predictor Server {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = cli.model_path {
        config.model.path = path;
    }
    info!(
        "Configuration loaded: Bind={}, Model={:?}",
        config.server.bind_address(),
        config.model.path
    );

    let pipeline = load_pipeline(&config.model.path)
        .with_context(|| format!("Failed to load model artifact {:?}", config.model.path))?;
    let model: Arc<dyn SalesModel> = Arc::new(pipeline);
    info!("Model ready: {} {}", model.name(), model.version());

    serve(config.server.bind_address(), model).await?;

    info!("Model released. Exiting...");
    Ok(())
}

/// Owns the model handle for the lifetime of the listener; it is dropped
/// once the server has drained.
async fn serve(addr: SocketAddr, model: Arc<dyn SalesModel>) -> Result<()> {
    let app = build_router(AppState::new(model));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on {}. Press Ctrl+C to shutdown.", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received. Draining requests...");
}
