// ABOUTME: HTTP server lifecycle for the recipe service
// ABOUTME: Shares resources with handlers, binds the listener and shuts down on signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server bootstrap
//!
//! [`ServerResources`] is built once at startup and shared by every handler
//! through an `Arc`. [`run`] binds the configured address and serves the
//! router until Ctrl+C or SIGTERM.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Process-wide state handed to route handlers
pub struct ServerResources {
    /// Database pool and managers
    pub database: Database,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the database and configuration
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::config(format!("Failed to bind {address}: {e}")).with_source(e)
    })?;

    serve(listener, resources).await
}

/// Serve on an already bound listener
///
/// # Errors
///
/// Returns an error if the server stops with an I/O failure
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> AppResult<()> {
    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::internal(format!("Failed to read local address: {e}")))?;
    let app = routes::router(resources);

    info!("HTTP server listening on {local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")).with_source(e))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
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
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
