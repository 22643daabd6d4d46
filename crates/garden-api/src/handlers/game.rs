//! Game action handlers: plant, click, sell.
//!
//! Each action loads the affected records, runs the economy-engine rules,
//! and hands the mutation to a transactional repository method, so state
//! either fully changes or not at all.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::dto::{
    ApiResponse, ClickTreeRequest, ClickTreeResponse, PlantTreeRequest, PlantTreeResponse,
    PlantWalletView, PlantedTreeView, SeedView, SellTreeRequest, SellTreeResponse, SellWalletView,
};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{CurrentPlayer, ValidatedJson};
use crate::state::AppState;
use garden_core::TreeQuality;
use garden_db::{DbPlantedTree, DbPlayer};

/// Plant a new tree
#[utoipa::path(
    post,
    path = "/api/v1/game/plant",
    tag = "Game",
    request_body = PlantTreeRequest,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Tree planted", body = PlantTreeResponse),
        (status = 400, description = "Not enough gold, slot occupied or invalid slot"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player or seed not found")
    )
)]
pub async fn plant_tree(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<PlantTreeRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PlantTreeResponse>>)> {
    let account = load_player(&state, &player).await?;

    let seed = state
        .db
        .catalog_repo()
        .find_seed(request.seed_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Seed not found".to_string()))?;

    let total_slots = account.total_slots();
    if request.slot_index >= total_slots {
        return Err(ApiError::InvalidSlot(format!(
            "Invalid slot. You have {} slots (0-{})",
            total_slots,
            total_slots - 1
        )));
    }

    if account.gold < seed.base_price {
        return Err(ApiError::InsufficientGold(format!(
            "Not enough gold. Need {}g, have {}g",
            seed.base_price, account.gold
        )));
    }

    let quality = TreeQuality::roll(&mut rand::thread_rng());
    let grow_time = garden_core::effective_grow_time(seed.base_grow_time, account.time_reduction_upgrade);
    let start_time = Utc::now();
    let end_time = start_time + Duration::seconds(grow_time);

    let (tree, gold) = state
        .db
        .tree_repo()
        .plant(
            account.id,
            seed.id,
            request.slot_index,
            quality,
            start_time,
            end_time,
            seed.base_price,
        )
        .await?;

    tracing::info!(
        player_id = %account.id,
        seed = %seed.code,
        slot = request.slot_index,
        quality = %quality,
        grow_time = grow_time,
        "Tree planted"
    );

    let view = PlantedTreeView::from_tree(tree, Some(SeedView::from(seed)), start_time);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            PlantTreeResponse {
                planted_tree: view,
                user: PlantWalletView { gold, total_slots },
            },
            "Tree planted successfully",
        )),
    ))
}

/// Water a tree (batch clicks) to reduce grow time
#[utoipa::path(
    post,
    path = "/api/v1/game/click",
    tag = "Game",
    request_body = ClickTreeRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Tree watered", body = ClickTreeResponse),
        (status = 400, description = "Tree already ready or reduction claim too high"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Tree belongs to another player"),
        (status = 404, description = "Player or tree not found")
    )
)]
pub async fn click_tree(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<ClickTreeRequest>,
) -> ApiResult<Json<ApiResponse<ClickTreeResponse>>> {
    let account = load_player(&state, &player).await?;
    let tree = load_owned_tree(&state, &account, request.planted_tree_id).await?;

    let now = Utc::now();
    if garden_core::is_ready(tree.end_time, now) {
        return Err(garden_core::EngineError::TreeAlreadyReady.into());
    }

    // Anti-abuse ceiling first; an over-claim is rejected, never clamped.
    garden_core::validate_reduction(request.clicks, request.time_reduction)?;

    let current_time_left = garden_core::time_left(tree.end_time, now);
    let outcome = garden_core::clamp_reduction(request.time_reduction, current_time_left);

    let (tree, total_clicks) = state
        .db
        .tree_repo()
        .apply_click(
            tree.id,
            account.id,
            outcome.applied_reduction,
            request.clicks as i64,
        )
        .await?;

    tracing::debug!(
        player_id = %account.id,
        tree_id = %tree.id,
        clicks = request.clicks,
        applied = outcome.applied_reduction,
        "Click batch applied"
    );

    let view = PlantedTreeView::from_tree(tree, None, now);

    Ok(Json(ApiResponse::with_message(
        ClickTreeResponse {
            time_left: outcome.time_left,
            is_ready: outcome.is_ready(),
            clicks_processed: request.clicks,
            time_reduced: outcome.applied_reduction,
            total_clicks,
            planted_tree: view,
        },
        format!(
            "Watered tree {} times ({}s reduced)",
            request.clicks, outcome.applied_reduction
        ),
    )))
}

/// Sell a ready tree
#[utoipa::path(
    post,
    path = "/api/v1/game/sell",
    tag = "Game",
    request_body = SellTreeRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Tree sold", body = SellTreeResponse),
        (status = 400, description = "Tree not ready yet"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Tree belongs to another player"),
        (status = 404, description = "Player or tree not found")
    )
)]
pub async fn sell_tree(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<SellTreeRequest>,
) -> ApiResult<Json<ApiResponse<SellTreeResponse>>> {
    let account = load_player(&state, &player).await?;
    let tree = load_owned_tree(&state, &account, request.planted_tree_id).await?;

    let now = Utc::now();
    if !garden_core::is_ready(tree.end_time, now) {
        let millis = (tree.end_time - now).num_milliseconds().max(0);
        let seconds_left = (millis + 999) / 1000;
        return Err(garden_core::EngineError::TreeNotReady { seconds_left }.into());
    }

    let seed = state
        .db
        .catalog_repo()
        .find_seed(tree.seed_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Seed not found".to_string()))?;

    let quality = tree.quality()?;
    let payout = garden_core::sell_price(seed.base_sell_price, quality, account.ad_sell_multiplier);
    let rarest = garden_core::record_rarest_sold(account.rarest_tree_sold.as_deref(), quality);
    let consume_multiplier = account.ad_sell_multiplier > 1;

    let updated = state
        .db
        .tree_repo()
        .sell(tree.id, account.id, payout, rarest, consume_multiplier)
        .await?;

    tracing::info!(
        player_id = %account.id,
        tree_id = %tree.id,
        seed = %seed.code,
        quality = %quality,
        payout = payout,
        "Tree sold"
    );

    Ok(Json(ApiResponse::with_message(
        SellTreeResponse {
            sold_price: payout,
            quality: quality.as_str().to_string(),
            seed_name: seed.name.clone(),
            user: SellWalletView {
                gold: updated.gold,
                total_earnings: updated.total_earnings,
                total_trees_sold: updated.total_trees_sold,
            },
        },
        format!("Sold {} ({}) for {}g", seed.name, quality, payout),
    )))
}

// =============================================================================
// Helpers
// =============================================================================

async fn load_player(state: &AppState, player: &CurrentPlayer) -> ApiResult<DbPlayer> {
    state
        .db
        .player_repo()
        .find_by_id(player.player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))
}

async fn load_owned_tree(
    state: &AppState,
    account: &DbPlayer,
    tree_id: uuid::Uuid,
) -> ApiResult<DbPlantedTree> {
    let tree = state
        .db
        .tree_repo()
        .find_by_id(tree_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Planted tree not found".to_string()))?;

    if tree.player_id != account.id {
        return Err(ApiError::Forbidden(
            "This tree does not belong to you".to_string(),
        ));
    }

    Ok(tree)
}
