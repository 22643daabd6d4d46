//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp
    pub timestamp: i64,
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Overall status
    pub status: String,
    /// Database status
    pub database: String,
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Health check endpoint
///
/// Returns 200 if the service is running; does not verify dependencies.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now_millis(),
    })
}

/// Readiness check endpoint
///
/// Returns 200 only when PostgreSQL answers.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service and dependencies are ready"),
        (status = 503, description = "A dependency is unavailable")
    )
)]
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let healthy = state
        .db
        .health_check()
        .await
        .map(|h| h.healthy)
        .unwrap_or(false);

    let (status, label) = if healthy {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(ReadinessResponse {
            status: label.to_string(),
            database: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        }),
    )
}

/// Ping endpoint
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    tag = "General",
    responses(
        (status = 200, description = "Pong")
    )
)]
pub async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// Server time endpoint
#[utoipa::path(
    get,
    path = "/api/v1/time",
    tag = "General",
    responses(
        (status = 200, description = "Server time", body = crate::dto::ServerTimeResponse)
    )
)]
pub async fn server_time() -> Json<crate::dto::ServerTimeResponse> {
    Json(crate::dto::ServerTimeResponse {
        server_time: now_millis(),
    })
}
