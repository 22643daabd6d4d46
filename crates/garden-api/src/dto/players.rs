//! Player DTOs

use chrono::{DateTime, Utc};
use garden_db::DbPlayer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::game::PlantedTreeView;

// =============================================================================
// Registration / profile updates
// =============================================================================

/// Public registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    /// Google account ID
    #[validate(length(min = 1, message = "googleId must not be empty"))]
    pub google_id: String,
    /// Email address
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Partial profile update; omitted fields are untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[validate(range(min = 0))]
    pub gold: Option<i64>,
    #[validate(range(min = 0))]
    pub total_earnings: Option<i64>,
    #[validate(range(min = 0))]
    pub total_trees_sold: Option<i64>,
    #[validate(range(min = 0))]
    pub total_clicks: Option<i64>,
    pub current_location: Option<Uuid>,
    #[validate(range(min = 0, max = 4))]
    pub premium_slots: Option<i16>,
    pub has_fairy: Option<bool>,
    pub has_no_ads: Option<bool>,
    pub click_power_upgrade: Option<bool>,
    pub time_reduction_upgrade: Option<bool>,
    #[validate(range(min = 0))]
    pub longest_combo: Option<i32>,
    pub rarest_tree_sold: Option<String>,
}

// =============================================================================
// Views
// =============================================================================

/// Embedded ad-boost tracker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdBoostsView {
    pub time_reduction_available: i64,
    pub sell_multiplier: i64,
    pub last_ad_watched_at: Option<DateTime<Utc>>,
    pub daily_ads_watched: i32,
    pub total_ad_watch_count: i64,
}

/// Full player profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: Uuid,
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub gold: i64,
    pub total_earnings: i64,
    pub total_trees_sold: i64,
    pub total_clicks: i64,
    pub longest_combo: i32,
    pub rarest_tree_sold: Option<String>,
    pub current_location: Option<Uuid>,
    pub unlocked_locations: Vec<Uuid>,
    pub premium_slots: i16,
    pub unlocked_seeds: Vec<Uuid>,
    pub collection_progress: i32,
    pub has_fairy: bool,
    pub has_no_ads: bool,
    pub click_power_upgrade: bool,
    pub time_reduction_upgrade: bool,
    pub ad_boosts: AdBoostsView,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerView {
    /// Assemble the profile view from the account row and its progression
    /// sets.
    pub fn from_parts(
        player: DbPlayer,
        unlocked_locations: Vec<Uuid>,
        unlocked_seeds: Vec<Uuid>,
    ) -> Self {
        Self {
            id: player.id,
            google_id: player.google_id,
            email: player.email,
            name: player.name,
            gold: player.gold,
            total_earnings: player.total_earnings,
            total_trees_sold: player.total_trees_sold,
            total_clicks: player.total_clicks,
            longest_combo: player.longest_combo,
            rarest_tree_sold: player.rarest_tree_sold,
            current_location: player.current_location,
            unlocked_locations,
            premium_slots: player.premium_slots,
            unlocked_seeds,
            collection_progress: player.collection_progress,
            has_fairy: player.has_fairy,
            has_no_ads: player.has_no_ads,
            click_power_upgrade: player.click_power_upgrade,
            time_reduction_upgrade: player.time_reduction_upgrade,
            ad_boosts: AdBoostsView {
                time_reduction_available: player.ad_time_reduction_available,
                sell_multiplier: player.ad_sell_multiplier,
                last_ad_watched_at: player.ad_last_watched_at,
                daily_ads_watched: player.ad_daily_watched,
                total_ad_watch_count: player.ad_total_watched,
            },
            last_login: player.last_login,
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

/// Slot occupancy stats for the aggregate state endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotStats {
    pub total_slots: i16,
    pub occupied_slots: usize,
    pub available_slots: i64,
}

/// Aggregate game state: profile + trees + slot stats
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub user: PlayerView,
    pub planted_trees: Vec<PlantedTreeView>,
    pub stats: SlotStats,
}
