//! CancerDAO site backend server
//!
//! Serves the subscription and contact-form API for the marketing site plus
//! the demo sales-CRM dashboard reads.
//!
//! Storage is either process-local memory or an embedded SQLite database,
//! selected once at startup via STORAGE_BACKEND.

use anyhow::{Context, Result};
use cdao_server::{create_router, storage, AppState, BackendKind, ServerConfig};
use std::net::SocketAddr;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting CancerDAO site backend v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, backend={:?}",
        config.bind_address, config.backend
    );

    let store = storage::connect(&config)
        .await
        .context("Failed to initialize storage backend")?;
    match config.backend {
        BackendKind::Memory => info!("In-memory storage initialized"),
        BackendKind::Sqlite => info!(
            "SQLite storage initialized at: {}",
            config.database_path.as_deref().unwrap_or_default()
        ),
    }

    let state = AppState { storage: store };

    info!("Building HTTP router...");
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
