//! Catalog DTOs: seeds and locations

use chrono::{DateTime, Utc};
use garden_db::{DbLocation, DbSeed};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// =============================================================================
// Seeds
// =============================================================================

/// Unlock requirement as shown to the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnlockRequirementView {
    /// Requirement kind: default, gold, trees_sold or event
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

/// Catalog seed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedView {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub base_price: i64,
    pub base_sell_price: i64,
    /// Seconds until maturity
    pub base_grow_time: i64,
    pub unlock_requirement: UnlockRequirementView,
    pub icon: String,
    pub description: String,
    pub is_event: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_end: Option<DateTime<Utc>>,
}

impl From<DbSeed> for SeedView {
    fn from(seed: DbSeed) -> Self {
        Self {
            id: seed.id,
            code: seed.code,
            name: seed.name,
            base_price: seed.base_price,
            base_sell_price: seed.base_sell_price,
            base_grow_time: seed.base_grow_time,
            unlock_requirement: UnlockRequirementView {
                kind: seed.unlock_kind,
                value: seed.unlock_value,
            },
            icon: seed.icon,
            description: seed.description,
            is_event: seed.is_event,
            event_start: seed.event_start,
            event_end: seed.event_end,
        }
    }
}

/// Query for seeds the caller could plant right now
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSeedsQuery {
    /// Caller's gold balance
    #[serde(default)]
    #[validate(range(min = 0))]
    pub gold: i64,
    /// Caller's lifetime trees sold
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_trees_sold: i64,
}

// =============================================================================
// Locations
// =============================================================================

/// Catalog location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub price: i64,
    pub order: i32,
    pub bonus_type: String,
    pub bonus_value: i64,
    pub bonus_multiplier: f64,
    pub icon: String,
    pub description: String,
    pub location_image_url: String,
    pub pot_image_url: String,
}

impl From<DbLocation> for LocationView {
    fn from(location: DbLocation) -> Self {
        Self {
            id: location.id,
            code: location.code,
            name: location.name,
            price: location.price,
            order: location.sort_order,
            bonus_type: location.bonus_kind,
            bonus_value: location.bonus_value,
            bonus_multiplier: location.bonus_multiplier,
            icon: location.icon,
            description: location.description,
            location_image_url: location.location_image_url,
            pot_image_url: location.pot_image_url,
        }
    }
}

/// Query for locations the caller can afford
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AvailableLocationsQuery {
    /// Caller's gold balance
    #[serde(default)]
    #[validate(range(min = 0))]
    pub gold: i64,
}

/// Purchase request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyLocationRequest {
    /// Location ID to purchase
    pub location_id: Uuid,
}

/// Purchase result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyLocationResponse {
    pub location: LocationView,
    pub gold: i64,
    pub unlocked_locations: Vec<Uuid>,
}

/// Selection request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectLocationRequest {
    /// Location ID to set as current
    pub location_id: Uuid,
}

/// Selection result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectLocationResponse {
    pub current_location: LocationView,
}
