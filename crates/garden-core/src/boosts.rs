//! Ad-reward boosts: daily cap, calendar-day reset, one-shot grants.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Ads a player may watch per calendar day.
pub const MAX_DAILY_ADS: u32 = 2;

/// Seconds of free time reduction granted by a `time` boost. Flat set, not
/// additive — repeated claims do not stack.
pub const AD_TIME_REDUCTION_SECONDS: i64 = 30;

/// Sell multiplier granted by a `sell` boost, consumed by the next sale.
pub const AD_SELL_MULTIPLIER: i64 = 2;

/// Which reward a finished ad unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoostType {
    Time,
    Sell,
}

impl BoostType {
    /// The flat value this boost writes into the player's boost tracker.
    pub fn granted_value(&self) -> i64 {
        match self {
            Self::Time => AD_TIME_REDUCTION_SECONDS,
            Self::Sell => AD_SELL_MULTIPLIER,
        }
    }
}

/// Snapshot of a player's embedded ad-boost tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdBoostState {
    pub time_reduction_available: i64,
    pub sell_multiplier: i64,
    pub last_ad_watched_at: Option<DateTime<Utc>>,
    pub daily_ads_watched: u32,
    pub total_ad_watch_count: i64,
}

impl AdBoostState {
    /// Whether the daily counter belongs to a previous calendar day and
    /// must be zeroed before the next claim is judged.
    ///
    /// Days are compared in server-local time, matching the midnight reset
    /// players observe.
    pub fn needs_daily_reset(&self, now: DateTime<Utc>) -> bool {
        match self.last_ad_watched_at {
            Some(last) => {
                last.with_timezone(&Local).date_naive() != now.with_timezone(&Local).date_naive()
            }
            None => false,
        }
    }

    /// Reject a claim once the daily cap is exhausted.
    pub fn check_daily_cap(&self) -> Result<(), EngineError> {
        if self.daily_ads_watched >= MAX_DAILY_ADS {
            return Err(EngineError::DailyAdLimitReached { max: MAX_DAILY_ADS });
        }
        Ok(())
    }

    pub fn ads_remaining(&self) -> u32 {
        MAX_DAILY_ADS.saturating_sub(self.daily_ads_watched)
    }

    pub fn can_watch_ad(&self) -> bool {
        self.daily_ads_watched < MAX_DAILY_ADS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn local_utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, mo, d, h, 30, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn state(last: Option<DateTime<Utc>>, watched: u32) -> AdBoostState {
        AdBoostState {
            time_reduction_available: 0,
            sell_multiplier: 1,
            last_ad_watched_at: last,
            daily_ads_watched: watched,
            total_ad_watch_count: watched as i64,
        }
    }

    #[test]
    fn reset_only_across_local_midnight() {
        let last = local_utc(2026, 3, 14, 23);
        let same_day = local_utc(2026, 3, 14, 23) + Duration::minutes(10);
        let next_day = local_utc(2026, 3, 15, 0);

        assert!(!state(Some(last), 2).needs_daily_reset(same_day));
        assert!(state(Some(last), 2).needs_daily_reset(next_day));
        // Year and month boundaries count as new days too.
        assert!(state(Some(local_utc(2025, 12, 31, 12)), 1).needs_daily_reset(local_utc(2026, 1, 1, 12)));
    }

    #[test]
    fn never_watched_needs_no_reset() {
        assert!(!state(None, 0).needs_daily_reset(Utc::now()));
    }

    #[test]
    fn daily_cap_at_two() {
        assert!(state(None, 0).check_daily_cap().is_ok());
        assert!(state(None, 1).check_daily_cap().is_ok());
        assert!(matches!(
            state(None, 2).check_daily_cap(),
            Err(EngineError::DailyAdLimitReached { max: 2 })
        ));
        assert_eq!(state(None, 1).ads_remaining(), 1);
        assert!(!state(None, 2).can_watch_ad());
    }

    #[test]
    fn boost_values_are_flat() {
        assert_eq!(BoostType::Time.granted_value(), 30);
        assert_eq!(BoostType::Sell.granted_value(), 2);
    }

    #[test]
    fn boost_type_serde() {
        assert_eq!(serde_json::to_string(&BoostType::Time).unwrap(), "\"time\"");
        assert_eq!(
            serde_json::from_str::<BoostType>("\"sell\"").unwrap(),
            BoostType::Sell
        );
    }
}
