//! Ad-reward handlers.
//!
//! Both endpoints roll the daily counter over before doing anything else:
//! when the last watch fell on a previous local calendar day the counter is
//! zeroed and persisted immediately, independent of whatever follows.

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::dto::{
    ActiveBoostsView, AdRewardResponse, AdStatusResponse, ApiResponse, ClaimAdRewardRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{CurrentPlayer, ValidatedJson};
use crate::state::AppState;
use garden_core::{BoostType, MAX_DAILY_ADS};
use garden_db::DbPlayer;

/// Get ad watching status
#[utoipa::path(
    get,
    path = "/api/v1/ads/status",
    tag = "Ads",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Ad watching status", body = AdStatusResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_ad_status(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
) -> ApiResult<Json<ApiResponse<AdStatusResponse>>> {
    let account = load_with_daily_reset(&state, &player).await?;
    let boosts = account.ad_boosts();

    Ok(Json(ApiResponse::ok(AdStatusResponse {
        daily_ads_watched: boosts.daily_ads_watched,
        ads_remaining: boosts.ads_remaining(),
        max_daily_ads: MAX_DAILY_ADS,
        can_watch_ad: boosts.can_watch_ad(),
        last_ad_watched_at: boosts.last_ad_watched_at,
        total_ad_watch_count: boosts.total_ad_watch_count,
        active_boosts: ActiveBoostsView {
            time_reduction: boosts.time_reduction_available,
            sell_multiplier: boosts.sell_multiplier,
        },
    })))
}

/// Claim an ad reward after watching
#[utoipa::path(
    post,
    path = "/api/v1/ads/reward",
    tag = "Ads",
    request_body = ClaimAdRewardRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Reward claimed", body = AdRewardResponse),
        (status = 400, description = "Daily ad limit reached"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn claim_reward(
    State(state): State<Arc<AppState>>,
    player: CurrentPlayer,
    ValidatedJson(request): ValidatedJson<ClaimAdRewardRequest>,
) -> ApiResult<Json<ApiResponse<AdRewardResponse>>> {
    let account = load_with_daily_reset(&state, &player).await?;

    account.ad_boosts().check_daily_cap()?;

    let now = Utc::now();
    let updated = state
        .db
        .player_repo()
        .apply_ad_claim(account.id, request.boost_type, now)
        .await?;

    tracing::info!(
        player_id = %account.id,
        boost = ?request.boost_type,
        daily = updated.ad_daily_watched,
        "Ad reward claimed"
    );

    let boosts = updated.ad_boosts();
    let message = match request.boost_type {
        BoostType::Time => "Time reduction boost activated!",
        BoostType::Sell => "Sell multiplier boost activated!",
    };

    Ok(Json(ApiResponse::with_message(
        AdRewardResponse {
            boost_type: request.boost_type,
            boost_value: request.boost_type.granted_value(),
            daily_ads_watched: boosts.daily_ads_watched,
            ads_remaining: boosts.ads_remaining(),
            total_ad_watch_count: boosts.total_ad_watch_count,
        },
        message,
    )))
}

/// Load the caller and persist a daily-counter reset when the calendar day
/// rolled over since the last watch.
async fn load_with_daily_reset(state: &AppState, player: &CurrentPlayer) -> ApiResult<DbPlayer> {
    let repo = state.db.player_repo();
    let mut account = repo
        .find_by_id(player.player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;

    if account.ad_boosts().needs_daily_reset(Utc::now()) {
        repo.reset_daily_ads(account.id).await?;
        account.ad_daily_watched = 0;
    }

    Ok(account)
}
