//! Player account handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::dto::{
    ApiResponse, CreatePlayerRequest, GameStateResponse, PlantedTreeView, PlayerView, SeedView,
    SlotStats, UpdatePlayerRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{CurrentPlayer, ValidatedJson};
use crate::state::AppState;
use garden_db::{catalog, DbPlayer, PlayerUpdate};

/// Create a new player (public, for registration)
#[utoipa::path(
    post,
    path = "/api/v1/players",
    tag = "Players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created", body = PlayerView),
        (status = 409, description = "Player already exists")
    )
)]
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreatePlayerRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PlayerView>>)> {
    let player = register_player(&state, &request.google_id, &request.email, &request.name).await?;
    let view = player_view(&state, player).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(view, "Player created successfully")),
    ))
}

/// Get player by ID (self only)
#[utoipa::path(
    get,
    path = "/api/v1/players/{playerId}",
    tag = "Players",
    params(("playerId" = Uuid, Path, description = "Player ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Player details", body = PlayerView),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Can only access your own data"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    current: CurrentPlayer,
) -> ApiResult<Json<ApiResponse<PlayerView>>> {
    current.require_self(player_id, "data")?;

    let player = find_player(&state, player_id).await?;
    let view = player_view(&state, player).await?;

    Ok(Json(ApiResponse::ok(view)))
}

/// Get player by Google ID (public, for the login flow)
#[utoipa::path(
    get,
    path = "/api/v1/players/google/{googleId}",
    tag = "Players",
    params(("googleId" = String, Path, description = "Google account ID")),
    responses(
        (status = 200, description = "Player details", body = PlayerView),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_player_by_google_id(
    State(state): State<Arc<AppState>>,
    Path(google_id): Path<String>,
) -> ApiResult<Json<ApiResponse<PlayerView>>> {
    let player = state
        .db
        .player_repo()
        .find_by_google_id(&google_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;
    let view = player_view(&state, player).await?;

    Ok(Json(ApiResponse::ok(view)))
}

/// Update player details (self only)
#[utoipa::path(
    patch,
    path = "/api/v1/players/{playerId}",
    tag = "Players",
    params(("playerId" = Uuid, Path, description = "Player ID")),
    request_body = UpdatePlayerRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Player updated", body = PlayerView),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Can only update your own data"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    current: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<UpdatePlayerRequest>,
) -> ApiResult<Json<ApiResponse<PlayerView>>> {
    current.require_self(player_id, "data")?;

    let update = PlayerUpdate {
        gold: request.gold,
        total_earnings: request.total_earnings,
        total_trees_sold: request.total_trees_sold,
        total_clicks: request.total_clicks,
        current_location: request.current_location,
        premium_slots: request.premium_slots,
        has_fairy: request.has_fairy,
        has_no_ads: request.has_no_ads,
        click_power_upgrade: request.click_power_upgrade,
        time_reduction_upgrade: request.time_reduction_upgrade,
        longest_combo: request.longest_combo,
        rarest_tree_sold: request.rarest_tree_sold,
    };

    let player = state.db.player_repo().update(player_id, &update).await?;
    let view = player_view(&state, player).await?;

    Ok(Json(ApiResponse::with_message(view, "Player updated successfully")))
}

/// Update last-login timestamp (self only)
#[utoipa::path(
    post,
    path = "/api/v1/players/{playerId}/login",
    tag = "Players",
    params(("playerId" = Uuid, Path, description = "Player ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Last login updated"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Can only update your own login time")
    )
)]
pub async fn update_last_login(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    current: CurrentPlayer,
) -> ApiResult<Json<ApiResponse<()>>> {
    current.require_self(player_id, "login time")?;

    state.db.player_repo().touch_last_login(player_id).await?;

    Ok(Json(ApiResponse::with_message((), "Last login updated")))
}

/// Get the complete game state (self only)
#[utoipa::path(
    get,
    path = "/api/v1/players/{playerId}/state",
    tag = "Players",
    params(("playerId" = Uuid, Path, description = "Player ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Player, planted trees and slot stats", body = GameStateResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Can only access your own game state"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_game_state(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    current: CurrentPlayer,
) -> ApiResult<Json<ApiResponse<GameStateResponse>>> {
    current.require_self(player_id, "game state")?;

    let player = find_player(&state, player_id).await?;
    let total_slots = player.total_slots();

    let trees = state.db.tree_repo().list_by_player(player_id).await?;
    let occupied = trees.len();

    // Join each tree with its catalog seed for the client.
    let seeds = state.db.catalog_repo().list_seeds().await?;
    let seeds_by_id: HashMap<Uuid, SeedView> =
        seeds.into_iter().map(|s| (s.id, SeedView::from(s))).collect();

    let now = Utc::now();
    let planted_trees: Vec<PlantedTreeView> = trees
        .into_iter()
        .map(|tree| {
            let seed = seeds_by_id.get(&tree.seed_id).cloned();
            PlantedTreeView::from_tree(tree, seed, now)
        })
        .collect();

    let view = player_view(&state, player).await?;

    Ok(Json(ApiResponse::ok(GameStateResponse {
        user: view,
        planted_trees,
        stats: SlotStats {
            total_slots,
            occupied_slots: occupied,
            available_slots: total_slots as i64 - occupied as i64,
        },
    })))
}

// =============================================================================
// Helpers shared with the auth handlers
// =============================================================================

/// Register a player seeded with the default location and starter seed.
pub(crate) async fn register_player(
    state: &AppState,
    google_id: &str,
    email: &str,
    name: &str,
) -> ApiResult<DbPlayer> {
    let catalog_repo = state.db.catalog_repo();

    let default_location = catalog_repo
        .find_location_by_code(catalog::DEFAULT_LOCATION_CODE)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Default location not found. Run the catalog sync first.".to_string())
        })?;

    let default_seed = catalog_repo
        .find_seed_by_code(catalog::DEFAULT_SEED_CODE)
        .await?;

    let player = state
        .db
        .player_repo()
        .create(
            &garden_db::NewPlayer {
                google_id: google_id.to_string(),
                email: email.to_string(),
                name: name.to_string(),
            },
            default_location.id,
            default_seed.map(|s| s.id),
        )
        .await?;

    tracing::info!(player_id = %player.id, "Player registered");

    Ok(player)
}

async fn find_player(state: &AppState, player_id: Uuid) -> ApiResult<DbPlayer> {
    state
        .db
        .player_repo()
        .find_by_id(player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))
}

/// Assemble the full profile view with its progression sets.
pub(crate) async fn player_view(state: &AppState, player: DbPlayer) -> ApiResult<PlayerView> {
    let repo = state.db.player_repo();
    let unlocked_locations = repo.unlocked_location_ids(player.id).await?;
    let unlocked_seeds = repo.unlocked_seed_ids(player.id).await?;

    Ok(PlayerView::from_parts(player, unlocked_locations, unlocked_seeds))
}
