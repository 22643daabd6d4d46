//! Database models - mapped from PostgreSQL tables

use chrono::{DateTime, Utc};
use garden_core::{AdBoostState, RequirementKind, TreeQuality, UnlockRequirement};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

// ============================================================================
// Player
// ============================================================================

/// Explicit column list for `RETURNING`/`SELECT` clauses that map to
/// [`DbPlayer`].
pub(crate) const PLAYER_COLUMNS: &str = r#"
    id, google_id, email, name, gold, total_earnings, total_trees_sold,
    total_clicks, longest_combo, rarest_tree_sold, current_location,
    premium_slots, collection_progress, has_fairy, has_no_ads,
    click_power_upgrade, time_reduction_upgrade, ad_time_reduction_available,
    ad_sell_multiplier, ad_last_watched_at, ad_daily_watched,
    ad_total_watched, last_login, created_at, updated_at
"#;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbPlayer {
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
    pub premium_slots: i16,
    pub collection_progress: i32,
    pub has_fairy: bool,
    pub has_no_ads: bool,
    pub click_power_upgrade: bool,
    pub time_reduction_upgrade: bool,
    pub ad_time_reduction_available: i64,
    pub ad_sell_multiplier: i64,
    pub ad_last_watched_at: Option<DateTime<Utc>>,
    pub ad_daily_watched: i32,
    pub ad_total_watched: i64,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbPlayer {
    /// Planting capacity: one free slot plus premium slots.
    pub fn total_slots(&self) -> i16 {
        garden_core::total_slots(self.premium_slots)
    }

    /// Snapshot of the embedded ad-boost tracker for the engine.
    pub fn ad_boosts(&self) -> AdBoostState {
        AdBoostState {
            time_reduction_available: self.ad_time_reduction_available,
            sell_multiplier: self.ad_sell_multiplier,
            last_ad_watched_at: self.ad_last_watched_at,
            daily_ads_watched: self.ad_daily_watched.max(0) as u32,
            total_ad_watch_count: self.ad_total_watched,
        }
    }
}

/// Fields accepted when registering a player.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub google_id: String,
    pub email: String,
    pub name: String,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub gold: Option<i64>,
    pub total_earnings: Option<i64>,
    pub total_trees_sold: Option<i64>,
    pub total_clicks: Option<i64>,
    pub current_location: Option<Uuid>,
    pub premium_slots: Option<i16>,
    pub has_fairy: Option<bool>,
    pub has_no_ads: Option<bool>,
    pub click_power_upgrade: Option<bool>,
    pub time_reduction_upgrade: Option<bool>,
    pub longest_combo: Option<i32>,
    pub rarest_tree_sold: Option<String>,
}

// ============================================================================
// Planted tree
// ============================================================================

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbPlantedTree {
    pub id: Uuid,
    pub player_id: Uuid,
    pub slot_index: i16,
    pub seed_id: Uuid,
    pub quality: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub time_reduced: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbPlantedTree {
    /// Parse the stored quality tier. A value outside the closed enum is a
    /// broken invariant, surfaced as an integrity error rather than a
    /// user-facing one.
    pub fn quality(&self) -> DbResult<TreeQuality> {
        self.quality
            .parse()
            .map_err(|_| DbError::Integrity(format!("planted tree {} has quality '{}'", self.id, self.quality)))
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbSeed {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub base_price: i64,
    pub base_sell_price: i64,
    pub base_grow_time: i64,
    pub unlock_kind: String,
    pub unlock_value: i64,
    pub icon: String,
    pub description: String,
    pub is_event: bool,
    pub event_start: Option<DateTime<Utc>>,
    pub event_end: Option<DateTime<Utc>>,
}

impl DbSeed {
    /// Stored unlock requirement; `None` when the kind is unknown, which
    /// eligibility filtering treats as never satisfied.
    pub fn unlock_requirement(&self) -> Option<UnlockRequirement> {
        RequirementKind::parse(&self.unlock_kind).map(|kind| UnlockRequirement {
            kind,
            value: self.unlock_value,
        })
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbLocation {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub price: i64,
    pub sort_order: i32,
    pub bonus_kind: String,
    pub bonus_value: i64,
    pub bonus_multiplier: f64,
    pub icon: String,
    pub description: String,
    pub location_image_url: String,
    pub pot_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(quality: &str) -> DbPlantedTree {
        let now = Utc::now();
        DbPlantedTree {
            id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            slot_index: 0,
            seed_id: Uuid::new_v4(),
            quality: quality.to_string(),
            start_time: now,
            end_time: now,
            time_reduced: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn quality_parses_known_tiers() {
        assert_eq!(tree("golden").quality().unwrap(), TreeQuality::Golden);
    }

    #[test]
    fn corrupt_quality_is_integrity_error() {
        assert!(matches!(tree("sparkling").quality(), Err(DbError::Integrity(_))));
    }
}
