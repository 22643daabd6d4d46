//! Grow-time and pricing arithmetic.
//!
//! Growth is never ticked by a background process. A tree stores its start
//! and end timestamps; everything else is derived from the clock at the
//! moment a record is read or acted on.

use chrono::{DateTime, Utc};

use crate::quality::TreeQuality;

/// Grow-time discount applied by the permanent time-reduction upgrade.
const UPGRADE_FACTOR: f64 = 0.9;

/// Effective grow duration in seconds for a seed.
pub fn effective_grow_time(base_grow_time: i64, has_time_upgrade: bool) -> i64 {
    if has_time_upgrade {
        (base_grow_time as f64 * UPGRADE_FACTOR).floor() as i64
    } else {
        base_grow_time
    }
}

/// Whole seconds left until a tree is ready, floored at zero.
pub fn time_left(end_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (end_time - now).num_seconds().max(0)
}

/// A tree is ready once the clock reaches its end time.
pub fn is_ready(end_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now >= end_time
}

/// Payout for a matured tree: floor(base × quality × ad multiplier).
pub fn sell_price(base_sell_price: i64, quality: TreeQuality, sell_multiplier: i64) -> i64 {
    (base_sell_price as f64 * quality.multiplier() * sell_multiplier as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn grow_time_upgrade_floors() {
        assert_eq!(effective_grow_time(300, false), 300);
        assert_eq!(effective_grow_time(300, true), 270);
        // 0.9 × 601 = 540.9 → 540
        assert_eq!(effective_grow_time(601, true), 540);
    }

    #[test]
    fn time_left_never_negative() {
        let now = Utc::now();
        assert_eq!(time_left(now - Duration::seconds(5), now), 0);
        assert_eq!(time_left(now + Duration::seconds(5), now), 5);
        assert!(is_ready(now, now));
        assert!(is_ready(now - Duration::seconds(1), now));
        assert!(!is_ready(now + Duration::seconds(1), now));
    }

    #[test]
    fn sell_price_normal_no_boost() {
        assert_eq!(sell_price(100, TreeQuality::Normal, 1), 100);
    }

    #[test]
    fn sell_price_rainbow_with_ad_boost() {
        // floor(550 × 5 × 2) = 5500
        assert_eq!(sell_price(550, TreeQuality::Rainbow, 2), 5500);
    }

    #[test]
    fn sell_price_withered_floors() {
        // floor(555 × 0.5) = 277
        assert_eq!(sell_price(555, TreeQuality::Withered, 1), 277);
        assert_eq!(sell_price(555, TreeQuality::Golden, 1), 1110);
    }
}
