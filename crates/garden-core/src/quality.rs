//! Tree quality tiers and the planting-time quality roll.
//!
//! The roll distribution is a fixed design constant, deliberately not
//! configurable per seed: 1% rainbow, 10% golden, 5% withered, 84% normal.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Rarity tier assigned once, when a tree is planted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeQuality {
    Withered,
    Normal,
    Golden,
    Rainbow,
}

impl TreeQuality {
    /// Sell-price multiplier for this tier. Exhaustive by construction.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Withered => 0.5,
            Self::Normal => 1.0,
            Self::Golden => 2.0,
            Self::Rainbow => 5.0,
        }
    }

    /// Map a uniform draw in `[0, 100)` onto a tier.
    pub fn from_roll(roll: f64) -> Self {
        if roll < 1.0 {
            Self::Rainbow
        } else if roll < 11.0 {
            Self::Golden
        } else if roll < 16.0 {
            Self::Withered
        } else {
            Self::Normal
        }
    }

    /// Roll a fresh quality using the supplied RNG.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.gen_range(0.0..100.0))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Withered => "withered",
            Self::Normal => "normal",
            Self::Golden => "golden",
            Self::Rainbow => "rainbow",
        }
    }
}

impl fmt::Display for TreeQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeQuality {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "withered" => Ok(Self::Withered),
            "normal" => Ok(Self::Normal),
            "golden" => Ok(Self::Golden),
            "rainbow" => Ok(Self::Rainbow),
            other => Err(EngineError::UnknownQuality(other.to_string())),
        }
    }
}

/// Rarest-tree-sold ratchet.
///
/// Rainbow overwrites anything and is never downgraded afterwards; golden
/// only fills an empty record. Returns the new value to store, or `None`
/// when the record should stay as it is.
pub fn record_rarest_sold(current: Option<&str>, sold: TreeQuality) -> Option<&'static str> {
    match sold {
        TreeQuality::Rainbow if current != Some("rainbow") => Some("rainbow"),
        TreeQuality::Golden if current.is_none() => Some("golden"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn roll_boundaries() {
        assert_eq!(TreeQuality::from_roll(0.0), TreeQuality::Rainbow);
        assert_eq!(TreeQuality::from_roll(0.999), TreeQuality::Rainbow);
        assert_eq!(TreeQuality::from_roll(1.0), TreeQuality::Golden);
        assert_eq!(TreeQuality::from_roll(10.999), TreeQuality::Golden);
        assert_eq!(TreeQuality::from_roll(11.0), TreeQuality::Withered);
        assert_eq!(TreeQuality::from_roll(15.999), TreeQuality::Withered);
        assert_eq!(TreeQuality::from_roll(16.0), TreeQuality::Normal);
        assert_eq!(TreeQuality::from_roll(99.999), TreeQuality::Normal);
    }

    #[test]
    fn roll_distribution_converges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x9a7d3e);
        let n = 100_000;
        let mut counts = [0u32; 4];
        for _ in 0..n {
            match TreeQuality::roll(&mut rng) {
                TreeQuality::Rainbow => counts[0] += 1,
                TreeQuality::Golden => counts[1] += 1,
                TreeQuality::Withered => counts[2] += 1,
                TreeQuality::Normal => counts[3] += 1,
            }
        }
        let pct = |c: u32| c as f64 * 100.0 / n as f64;
        assert!((pct(counts[0]) - 1.0).abs() < 0.3, "rainbow {}", pct(counts[0]));
        assert!((pct(counts[1]) - 10.0).abs() < 0.6, "golden {}", pct(counts[1]));
        assert!((pct(counts[2]) - 5.0).abs() < 0.5, "withered {}", pct(counts[2]));
        assert!((pct(counts[3]) - 84.0).abs() < 0.8, "normal {}", pct(counts[3]));
    }

    #[test]
    fn multipliers_are_fixed() {
        assert_eq!(TreeQuality::Withered.multiplier(), 0.5);
        assert_eq!(TreeQuality::Normal.multiplier(), 1.0);
        assert_eq!(TreeQuality::Golden.multiplier(), 2.0);
        assert_eq!(TreeQuality::Rainbow.multiplier(), 5.0);
    }

    #[test]
    fn parse_round_trip() {
        for q in [
            TreeQuality::Withered,
            TreeQuality::Normal,
            TreeQuality::Golden,
            TreeQuality::Rainbow,
        ] {
            assert_eq!(q.as_str().parse::<TreeQuality>().unwrap(), q);
        }
        assert!(matches!(
            "sparkling".parse::<TreeQuality>(),
            Err(EngineError::UnknownQuality(_))
        ));
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&TreeQuality::Rainbow).unwrap();
        assert_eq!(json, "\"rainbow\"");
    }

    #[test]
    fn rarest_ratchet_rainbow_wins() {
        assert_eq!(record_rarest_sold(None, TreeQuality::Rainbow), Some("rainbow"));
        assert_eq!(record_rarest_sold(Some("golden"), TreeQuality::Rainbow), Some("rainbow"));
        assert_eq!(record_rarest_sold(Some("rainbow"), TreeQuality::Rainbow), None);
        // Once rainbow, nothing downgrades it.
        assert_eq!(record_rarest_sold(Some("rainbow"), TreeQuality::Golden), None);
    }

    #[test]
    fn rarest_ratchet_golden_fills_empty_only() {
        // Golden records even after cheaper tiers were sold earlier, because
        // those never wrote anything — the flagged one-way behavior.
        assert_eq!(record_rarest_sold(None, TreeQuality::Golden), Some("golden"));
        assert_eq!(record_rarest_sold(Some("golden"), TreeQuality::Golden), None);
        assert_eq!(record_rarest_sold(None, TreeQuality::Normal), None);
        assert_eq!(record_rarest_sold(None, TreeQuality::Withered), None);
    }
}
