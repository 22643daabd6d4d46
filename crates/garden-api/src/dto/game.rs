//! Game action DTOs: plant, click, sell

use chrono::{DateTime, Utc};
use garden_db::DbPlantedTree;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::catalog::SeedView;

// =============================================================================
// Plant
// =============================================================================

/// Plant a seed into a slot
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantTreeRequest {
    /// Seed ID
    pub seed_id: Uuid,
    /// Slot index (0-4)
    #[validate(range(min = 0, max = 4, message = "slotIndex must be between 0 and 4"))]
    pub slot_index: i16,
}

/// Planted tree as shown to the client, with derived time fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantedTreeView {
    pub id: Uuid,
    pub player_id: Uuid,
    pub slot_index: i16,
    pub seed_id: Uuid,
    /// Seed details, populated on reads that join the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedView>,
    /// Quality tier: withered, normal, golden or rainbow
    pub quality: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Cumulative seconds already clicked away
    pub time_reduced: i64,
    /// Seconds left until harvest, floored at zero
    pub time_left: i64,
    pub is_ready: bool,
}

impl PlantedTreeView {
    /// Build the view, deriving time-left from the clock.
    pub fn from_tree(tree: DbPlantedTree, seed: Option<SeedView>, now: DateTime<Utc>) -> Self {
        let time_left = garden_core::time_left(tree.end_time, now);
        Self {
            id: tree.id,
            player_id: tree.player_id,
            slot_index: tree.slot_index,
            seed_id: tree.seed_id,
            seed,
            quality: tree.quality,
            start_time: tree.start_time,
            end_time: tree.end_time,
            time_reduced: tree.time_reduced,
            time_left,
            is_ready: time_left == 0,
        }
    }
}

/// Caller's wallet summary after planting
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantWalletView {
    pub gold: i64,
    pub total_slots: i16,
}

/// Plant result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantTreeResponse {
    pub planted_tree: PlantedTreeView,
    pub user: PlantWalletView,
}

// =============================================================================
// Click
// =============================================================================

/// Batch of clicks with the client-computed reduction claim
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickTreeRequest {
    /// Planted tree ID
    pub planted_tree_id: Uuid,
    /// Number of clicks in the batch
    #[validate(range(min = 1, max = 1000, message = "clicks must be between 1 and 1000"))]
    pub clicks: u32,
    /// Claimed reduction in seconds, combo bonus included
    #[validate(range(min = 1, max = 10000, message = "timeReduction must be between 1 and 10000"))]
    pub time_reduction: i64,
}

/// Click result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickTreeResponse {
    pub planted_tree: PlantedTreeView,
    pub time_left: i64,
    pub is_ready: bool,
    pub clicks_processed: u32,
    /// Seconds actually applied after clamping
    pub time_reduced: i64,
    pub total_clicks: i64,
}

// =============================================================================
// Sell
// =============================================================================

/// Sell a matured tree
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellTreeRequest {
    /// Planted tree ID
    pub planted_tree_id: Uuid,
}

/// Caller's stats after the sale
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellWalletView {
    pub gold: i64,
    pub total_earnings: i64,
    pub total_trees_sold: i64,
}

/// Sell result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellTreeResponse {
    pub sold_price: i64,
    /// Quality tier of the sold tree
    pub quality: String,
    pub seed_name: String,
    pub user: SellWalletView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn tree(end_offset_secs: i64) -> DbPlantedTree {
        let now = Utc::now();
        DbPlantedTree {
            id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            slot_index: 1,
            seed_id: Uuid::new_v4(),
            quality: "normal".to_string(),
            start_time: now - Duration::seconds(60),
            end_time: now + Duration::seconds(end_offset_secs),
            time_reduced: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn view_derives_time_left() {
        let now = Utc::now();
        let view = PlantedTreeView::from_tree(tree(90), None, now);
        assert!(view.time_left >= 89 && view.time_left <= 90);
        assert!(!view.is_ready);

        let view = PlantedTreeView::from_tree(tree(-5), None, now);
        assert_eq!(view.time_left, 0);
        assert!(view.is_ready);
    }

    #[test]
    fn click_request_bounds_validate() {
        use validator::Validate;

        let ok = ClickTreeRequest {
            planted_tree_id: Uuid::new_v4(),
            clicks: 5,
            time_reduction: 12,
        };
        assert!(ok.validate().is_ok());

        let too_many = ClickTreeRequest {
            clicks: 1001,
            ..ok.clone()
        };
        assert!(too_many.validate().is_err());

        let zero_reduction = ClickTreeRequest {
            time_reduction: 0,
            ..ok
        };
        assert!(zero_reduction.validate().is_err());
    }
}
