//! Seed catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::dto::{ApiResponse, AvailableSeedsQuery, ListResponse, SeedView};
use crate::error::{ApiError, ApiResult};
use crate::extractors::ValidatedQuery;
use crate::state::AppState;

/// Get all seeds
#[utoipa::path(
    get,
    path = "/api/v1/seeds",
    tag = "Seeds",
    responses(
        (status = 200, description = "All seeds, cheapest first", body = [SeedView])
    )
)]
pub async fn list_seeds(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ListResponse<SeedView>>> {
    let seeds = state.db.catalog_repo().list_seeds().await?;

    Ok(Json(ListResponse::ok(
        seeds.into_iter().map(SeedView::from).collect(),
    )))
}

/// Get seeds available to the caller
#[utoipa::path(
    get,
    path = "/api/v1/seeds/available",
    tag = "Seeds",
    params(
        ("gold" = i64, Query, description = "Caller's gold balance"),
        ("totalTreesSold" = i64, Query, description = "Caller's lifetime trees sold")
    ),
    responses(
        (status = 200, description = "Seeds whose unlock requirement is satisfied", body = [SeedView])
    )
)]
pub async fn list_available_seeds(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<AvailableSeedsQuery>,
) -> ApiResult<Json<ListResponse<SeedView>>> {
    let seeds = state.db.catalog_repo().list_seeds().await?;
    let now = Utc::now();

    let available: Vec<SeedView> = seeds
        .into_iter()
        .filter(|seed| match seed.unlock_requirement() {
            Some(requirement) => garden_core::seed_available(
                &requirement,
                seed.is_event,
                (seed.event_start, seed.event_end),
                query.gold,
                query.total_trees_sold,
                now,
            ),
            // Unknown requirement kinds never unlock.
            None => false,
        })
        .map(SeedView::from)
        .collect();

    Ok(Json(ListResponse::ok(available)))
}

/// Get seed by ID
#[utoipa::path(
    get,
    path = "/api/v1/seeds/{seedId}",
    tag = "Seeds",
    params(
        ("seedId" = Uuid, Path, description = "Seed ID")
    ),
    responses(
        (status = 200, description = "Seed details", body = SeedView),
        (status = 404, description = "Seed not found")
    )
)]
pub async fn get_seed(
    State(state): State<Arc<AppState>>,
    Path(seed_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<SeedView>>> {
    let seed = state
        .db
        .catalog_repo()
        .find_seed(seed_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Seed not found".to_string()))?;

    Ok(Json(ApiResponse::ok(SeedView::from(seed))))
}
