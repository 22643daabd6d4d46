//! Garden REST API
//!
//! REST surface for the garden idle-farming backend.
//!
//! # API Structure
//!
//! ```text
//! /api/v1/
//! ├── /auth          - Google sign-in, profile, service status
//! ├── /players       - Registration, profile, aggregate game state
//! ├── /game          - Plant, click, sell
//! ├── /ads           - Ad-reward status and claims
//! ├── /locations     - Location catalog, purchase, selection
//! └── /seeds         - Seed catalog and availability
//! ```
//!
//! Mutating endpoints require a bearer token; callers can only act on
//! their own account.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::http::HeaderName;
use axum::Router;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Enable CORS for browser clients
    pub enable_cors: bool,
    /// Enable request compression
    pub enable_compression: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_compression: true,
            enable_tracing: true,
        }
    }
}

/// Create the main API router with all middleware
pub fn create_router(state: Arc<AppState>, config: ApiConfig) -> Router {
    let auth_layer = state.auth.layer();

    let mut router = Router::new()
        // API v1 routes
        .nest("/api/v1", routes::api_v1_routes())
        // Health checks at root
        .route("/health", axum::routing::get(handlers::health::health_check))
        .route("/ready", axum::routing::get(handlers::health::readiness_check))
        // OpenAPI documentation
        .merge(routes::swagger_routes())
        // Shared state
        .with_state(state)
        // Bearer-token authentication
        .layer(auth_layer);

    // Add request ID middleware
    let x_request_id = HeaderName::from_static("x-request-id");
    router = router
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(x_request_id));

    // Add tracing
    if config.enable_tracing {
        router = router.layer(axum::middleware::from_fn(middleware::timing_middleware));
        router = router.layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        );
    }

    // Add compression
    if config.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    // Add CORS (the mobile client calls from a webview during development)
    if config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert!(config.enable_cors);
        assert!(config.enable_compression);
        assert!(config.enable_tracing);
    }
}
