//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize storage from configuration
//! - Start the optional metrics exporter
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener binds last (traffic only when ready)

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::storage::{create_store, StorageError};

/// Errors that abort the service.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The configured storage backend could not be created.
    #[error("failed to create the database: {0}")]
    Storage(#[from] StorageError),

    /// The listener could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// The server stopped with an error (including a drain timeout).
    #[error("server error: {0}")]
    Server(#[source] io::Error),
}

/// Start every subsystem and serve until `shutdown` is triggered.
pub async fn run(config: AppConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let shutdown_rx = shutdown.subscribe();

    let store = create_store(&config.database)?;
    tracing::info!(database = %config.database.kind, "Storage initialized");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(
        address = %address,
        "Listening for connections"
    );

    HttpServer::new(config.server, store)
        .run(listener, shutdown_rx)
        .await
        .map_err(StartupError::Server)
}
