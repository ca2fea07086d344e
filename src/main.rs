use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};

use blog_routes::{
    config::{Backend, Config},
    create_router,
    middleware::init_tracing,
    AppState, BlogStore, Database, MemoryStore,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let store = match open_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open store: {:#}", e);
            std::process::exit(1);
        }
    };

    let app = create_router(store, config.request_timeout);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Path normalization wraps the router, so serve it as a plain service
    let service = ServiceExt::<Request>::into_make_service(app);
    if let Err(e) = axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Connect the configured backend and bring its schema or seed data up to date
async fn open_store(config: &Config) -> anyhow::Result<AppState> {
    match config.backend {
        Backend::Postgres(ref database_config) => {
            let database = Database::new(database_config.clone()).await?;
            info!("Database connection established");

            database.migrate().await?;
            let store: AppState = Arc::new(database);
            Ok(store)
        }
        Backend::Memory { ref seed_file } => {
            let store = MemoryStore::new();
            match seed_file {
                Some(path) => {
                    let json = tokio::fs::read_to_string(path)
                        .await
                        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
                    let (authors, posts) = store.seed_from_json(&json)?;
                    info!("Using in-memory store seeded with {} authors and {} posts", authors, posts);
                }
                None => info!("Using empty in-memory store; set STORE_SEED_FILE to load a fixture"),
            }
            store.ping().await?;

            let store: AppState = Arc::new(store);
            Ok(store)
        }
    }
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
