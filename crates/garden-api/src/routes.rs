//! API Routes
//!
//! Route definitions for all API endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Create API v1 routes
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        // General endpoints
        .route("/ping", get(handlers::health::ping))
        .route("/time", get(handlers::health::server_time))
        // Auth routes
        .nest("/auth", auth_routes())
        // Player routes
        .nest("/players", player_routes())
        // Game actions (require auth)
        .nest("/game", game_routes())
        // Ad rewards (require auth)
        .nest("/ads", ads_routes())
        // Catalog
        .nest("/locations", location_routes())
        .nest("/seeds", seed_routes())
}

/// Authentication routes
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/google", post(handlers::auth::google_login))
        .route("/profile", get(handlers::auth::get_profile))
        .route("/status", get(handlers::auth::get_status))
}

/// Player routes
fn player_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::players::create_player))
        .route("/google/:googleId", get(handlers::players::get_player_by_google_id))
        .route("/:playerId", get(handlers::players::get_player))
        .route("/:playerId", patch(handlers::players::update_player))
        .route("/:playerId/login", post(handlers::players::update_last_login))
        .route("/:playerId/state", get(handlers::players::get_game_state))
}

/// Game action routes
fn game_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plant", post(handlers::game::plant_tree))
        .route("/click", post(handlers::game::click_tree))
        .route("/sell", post(handlers::game::sell_tree))
}

/// Ad reward routes
fn ads_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(handlers::ads::get_ad_status))
        .route("/reward", post(handlers::ads::claim_reward))
}

/// Location routes
fn location_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::locations::list_locations))
        .route("/available", get(handlers::locations::list_available_locations))
        .route("/buy", post(handlers::locations::buy_location))
        .route("/select", post(handlers::locations::select_location))
        .route("/:locationId", get(handlers::locations::get_location))
}

/// Seed routes
fn seed_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::seeds::list_seeds))
        .route("/available", get(handlers::seeds::list_available_seeds))
        .route("/:seedId", get(handlers::seeds::get_seed))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use crate::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
