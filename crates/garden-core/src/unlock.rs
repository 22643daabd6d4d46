//! Catalog unlock eligibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a catalog seed becomes plantable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Default,
    Gold,
    TreesSold,
    Event,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Gold => "gold",
            Self::TreesSold => "trees_sold",
            Self::Event => "event",
        }
    }

    /// Parse a stored kind. Unknown kinds return `None` and are treated as
    /// never satisfied by [`seed_available`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "gold" => Some(Self::Gold),
            "trees_sold" => Some(Self::TreesSold),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

/// Unlock condition attached to a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRequirement {
    pub kind: RequirementKind,
    pub value: i64,
}

/// Whether a seed is available to a player right now.
///
/// `event_window` carries the seed's `is_event` flag and optional start/end
/// timestamps; the window is inclusive on both ends.
pub fn seed_available(
    requirement: &UnlockRequirement,
    is_event: bool,
    event_window: (Option<DateTime<Utc>>, Option<DateTime<Utc>>),
    gold: i64,
    total_trees_sold: i64,
    now: DateTime<Utc>,
) -> bool {
    match requirement.kind {
        RequirementKind::Default => true,
        RequirementKind::Gold => gold >= requirement.value,
        RequirementKind::TreesSold => total_trees_sold >= requirement.value,
        RequirementKind::Event => {
            if !is_event {
                return false;
            }
            match event_window {
                (Some(start), Some(end)) => now >= start && now <= end,
                _ => false,
            }
        }
    }
}

/// Location purchases gate on gold alone.
pub fn location_available(price: i64, gold: i64) -> bool {
    gold >= price
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn req(kind: RequirementKind, value: i64) -> UnlockRequirement {
        UnlockRequirement { kind, value }
    }

    #[test]
    fn default_always_available() {
        let now = Utc::now();
        assert!(seed_available(&req(RequirementKind::Default, 0), false, (None, None), 0, 0, now));
    }

    #[test]
    fn gold_threshold() {
        let now = Utc::now();
        let r = req(RequirementKind::Gold, 500);
        assert!(!seed_available(&r, false, (None, None), 499, 0, now));
        assert!(seed_available(&r, false, (None, None), 500, 0, now));
    }

    #[test]
    fn trees_sold_threshold() {
        let now = Utc::now();
        let r = req(RequirementKind::TreesSold, 10);
        assert!(!seed_available(&r, false, (None, None), 0, 9, now));
        assert!(seed_available(&r, false, (None, None), 0, 10, now));
    }

    #[test]
    fn event_window_is_inclusive() {
        let now = Utc::now();
        let r = req(RequirementKind::Event, 0);
        let window = (Some(now - Duration::hours(1)), Some(now + Duration::hours(1)));

        assert!(seed_available(&r, true, window, 0, 0, now));
        assert!(seed_available(&r, true, (Some(now), Some(now)), 0, 0, now));
        // Flag off, or window missing/expired → unavailable.
        assert!(!seed_available(&r, false, window, 0, 0, now));
        assert!(!seed_available(&r, true, (None, None), 0, 0, now));
        assert!(!seed_available(
            &r,
            true,
            (Some(now + Duration::hours(1)), Some(now + Duration::hours(2))),
            0,
            0,
            now
        ));
    }

    #[test]
    fn unknown_kind_never_satisfies() {
        assert_eq!(RequirementKind::parse("vip_only"), None);
        assert_eq!(RequirementKind::parse("trees_sold"), Some(RequirementKind::TreesSold));
    }

    #[test]
    fn location_gates_on_gold_only() {
        assert!(location_available(1000, 1000));
        assert!(!location_available(1000, 999));
        assert!(location_available(0, 0));
    }
}
