//! OpenAPI documentation
//!
//! Auto-generated OpenAPI 3.0 specification for the garden API.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

/// Garden API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden API",
        description = "Backend API for the garden idle-farming mobile game: plant seeds, click trees ready faster, sell the harvest, claim daily ad boosts.",
        version = "1.0.0",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
    paths(
        // Health
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::health::ping,
        handlers::health::server_time,
        // Auth
        handlers::auth::google_login,
        handlers::auth::get_profile,
        handlers::auth::get_status,
        // Players
        handlers::players::create_player,
        handlers::players::get_player,
        handlers::players::get_player_by_google_id,
        handlers::players::update_player,
        handlers::players::update_last_login,
        handlers::players::get_game_state,
        // Game
        handlers::game::plant_tree,
        handlers::game::click_tree,
        handlers::game::sell_tree,
        // Ads
        handlers::ads::get_ad_status,
        handlers::ads::claim_reward,
        // Catalog
        handlers::locations::list_locations,
        handlers::locations::list_available_locations,
        handlers::locations::get_location,
        handlers::locations::buy_location,
        handlers::locations::select_location,
        handlers::seeds::list_seeds,
        handlers::seeds::list_available_seeds,
        handlers::seeds::get_seed,
    ),
    components(
        schemas(
            // Common
            ErrorResponse,
            dto::ServerTimeResponse,
            // Auth
            dto::GoogleLoginRequest,
            dto::LoginResponse,
            dto::LoginPlayerSummary,
            dto::ProfileResponse,
            dto::AuthStatusResponse,
            // Players
            dto::CreatePlayerRequest,
            dto::UpdatePlayerRequest,
            dto::PlayerView,
            dto::AdBoostsView,
            dto::SlotStats,
            dto::GameStateResponse,
            // Game
            dto::PlantTreeRequest,
            dto::PlantTreeResponse,
            dto::PlantWalletView,
            dto::PlantedTreeView,
            dto::ClickTreeRequest,
            dto::ClickTreeResponse,
            dto::SellTreeRequest,
            dto::SellTreeResponse,
            dto::SellWalletView,
            // Ads
            dto::ClaimAdRewardRequest,
            dto::AdStatusResponse,
            dto::AdRewardResponse,
            dto::ActiveBoostsView,
            // Catalog
            dto::SeedView,
            dto::UnlockRequirementView,
            dto::AvailableSeedsQuery,
            dto::LocationView,
            dto::AvailableLocationsQuery,
            dto::BuyLocationRequest,
            dto::BuyLocationResponse,
            dto::SelectLocationRequest,
            dto::SelectLocationResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "General", description = "General endpoints (ping, time)"),
        (name = "Authentication", description = "Google sign-in and session tokens"),
        (name = "Players", description = "Player accounts and game state"),
        (name = "Game", description = "Game mechanics (plant, click, sell)"),
        (name = "Ads", description = "Ad-reward boosts"),
        (name = "Locations", description = "Location catalog and unlocks"),
        (name = "Seeds", description = "Seed catalog")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security scheme modifier
pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Get the OpenAPI JSON specification
pub fn openapi_json() -> String {
    ApiDoc::openapi()
        .to_json()
        .expect("Failed to serialize OpenAPI spec")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Garden API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json() {
        let json = openapi_json();
        assert!(json.contains("Garden API"));
        assert!(json.contains("/api/v1/game/plant"));
        assert!(json.contains("/api/v1/ads/reward"));
    }
}
