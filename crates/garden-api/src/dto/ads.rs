//! Ad-reward DTOs

use chrono::{DateTime, Utc};
use garden_core::BoostType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Claim the reward for a finished ad
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAdRewardRequest {
    /// Boost to activate: "time" or "sell"
    #[schema(value_type = String, example = "time")]
    pub boost_type: BoostType,
}

/// Currently active one-shot boosts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBoostsView {
    /// Free reduction seconds available
    pub time_reduction: i64,
    /// Multiplier the next sale will apply
    pub sell_multiplier: i64,
}

/// Ad-watching status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdStatusResponse {
    pub daily_ads_watched: u32,
    pub ads_remaining: u32,
    pub max_daily_ads: u32,
    pub can_watch_ad: bool,
    pub last_ad_watched_at: Option<DateTime<Utc>>,
    pub total_ad_watch_count: i64,
    pub active_boosts: ActiveBoostsView,
}

/// Claim result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdRewardResponse {
    /// Boost that was activated
    #[schema(value_type = String, example = "time")]
    pub boost_type: BoostType,
    /// Value written into the boost tracker
    pub boost_value: i64,
    pub daily_ads_watched: u32,
    pub ads_remaining: u32,
    pub total_ad_watch_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_request_parses_boost_types() {
        let req: ClaimAdRewardRequest = serde_json::from_str(r#"{"boostType": "sell"}"#).unwrap();
        assert_eq!(req.boost_type, BoostType::Sell);

        assert!(serde_json::from_str::<ClaimAdRewardRequest>(r#"{"boostType": "mega"}"#).is_err());
    }
}
