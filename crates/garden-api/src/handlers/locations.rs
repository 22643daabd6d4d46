//! Location handlers: catalog reads, purchase and selection

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::dto::{
    ApiResponse, AvailableLocationsQuery, BuyLocationRequest, BuyLocationResponse, ListResponse,
    LocationView, SelectLocationRequest, SelectLocationResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{CurrentPlayer, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Get all locations
#[utoipa::path(
    get,
    path = "/api/v1/locations",
    tag = "Locations",
    responses(
        (status = 200, description = "All locations in unlock order", body = [LocationView])
    )
)]
pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ListResponse<LocationView>>> {
    let locations = state.db.catalog_repo().list_locations().await?;

    Ok(Json(ListResponse::ok(
        locations.into_iter().map(LocationView::from).collect(),
    )))
}

/// Get locations the caller can afford
#[utoipa::path(
    get,
    path = "/api/v1/locations/available",
    tag = "Locations",
    params(
        ("gold" = i64, Query, description = "Caller's gold balance")
    ),
    responses(
        (status = 200, description = "Affordable locations", body = [LocationView])
    )
)]
pub async fn list_available_locations(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<AvailableLocationsQuery>,
) -> ApiResult<Json<ListResponse<LocationView>>> {
    let locations = state.db.catalog_repo().list_locations().await?;

    let available: Vec<LocationView> = locations
        .into_iter()
        .filter(|l| garden_core::location_available(l.price, query.gold))
        .map(LocationView::from)
        .collect();

    Ok(Json(ListResponse::ok(available)))
}

/// Get location by ID
#[utoipa::path(
    get,
    path = "/api/v1/locations/{locationId}",
    tag = "Locations",
    params(
        ("locationId" = Uuid, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location details", body = LocationView),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(location_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<LocationView>>> {
    let location = state
        .db
        .catalog_repo()
        .find_location(location_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))?;

    Ok(Json(ApiResponse::ok(LocationView::from(location))))
}

/// Purchase a location
#[utoipa::path(
    post,
    path = "/api/v1/locations/buy",
    tag = "Locations",
    request_body = BuyLocationRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Location unlocked", body = BuyLocationResponse),
        (status = 400, description = "Not enough gold"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Location not found"),
        (status = 409, description = "Location already unlocked")
    )
)]
pub async fn buy_location(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<BuyLocationRequest>,
) -> ApiResult<Json<ApiResponse<BuyLocationResponse>>> {
    let location = state
        .db
        .catalog_repo()
        .find_location(request.location_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))?;

    let repo = state.db.player_repo();
    let updated = repo
        .buy_location(player.player_id, location.id, location.price)
        .await?;
    let unlocked = repo.unlocked_location_ids(player.player_id).await?;

    Ok(Json(ApiResponse::with_message(
        BuyLocationResponse {
            gold: updated.gold,
            unlocked_locations: unlocked,
            location: LocationView::from(location),
        },
        "Location unlocked",
    )))
}

/// Select the current location
#[utoipa::path(
    post,
    path = "/api/v1/locations/select",
    tag = "Locations",
    request_body = SelectLocationRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current location changed", body = SelectLocationResponse),
        (status = 400, description = "Location is not unlocked"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn select_location(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<SelectLocationRequest>,
) -> ApiResult<Json<ApiResponse<SelectLocationResponse>>> {
    let location = state
        .db
        .catalog_repo()
        .find_location(request.location_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))?;

    state
        .db
        .player_repo()
        .select_location(player.player_id, location.id)
        .await?;

    Ok(Json(ApiResponse::ok(SelectLocationResponse {
        current_location: LocationView::from(location),
    })))
}
