// ABOUTME: Health check route for service monitoring
// ABOUTME: Reports liveness plus database reachability for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{constants::routes, server::ServerResources};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    #[schema(example = "healthy")]
    pub status: String,
    /// `connected` or `unavailable`
    #[schema(example = "connected")]
    pub database: String,
    /// Service version
    pub version: String,
    /// Check time (RFC 3339)
    pub timestamp: String,
}

/// Report service and database health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
    let (status, label, database) = match resources.database.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected"),
        Err(e) => {
            warn!("Health check failed: {e}");
            let status = StatusCode::from_u16(e.http_status())
                .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
            (status, "unhealthy", "unavailable")
        }
    };

    let body = HealthResponse {
        status: label.to_owned(),
        database: database.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (status, Json(body)).into_response()
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(handle_health))
            .with_state(resources)
    }
}
