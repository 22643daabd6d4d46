//! Garden domain layer — the economy engine, free of any I/O.
//!
//! Everything a game action needs to decide is here: quality rolls, grow
//! durations, sell pricing, click-reduction clamping, ad-boost rules and
//! catalog unlock eligibility. The persistence and API layers call into
//! these functions and own the side effects.

pub mod boosts;
pub mod clicks;
pub mod error;
pub mod growth;
pub mod quality;
pub mod slots;
pub mod unlock;

pub use boosts::{AdBoostState, BoostType, AD_SELL_MULTIPLIER, AD_TIME_REDUCTION_SECONDS, MAX_DAILY_ADS};
pub use clicks::{clamp_reduction, validate_reduction, ClickOutcome, MAX_SECONDS_PER_CLICK};
pub use error::EngineError;
pub use growth::{effective_grow_time, is_ready, sell_price, time_left};
pub use quality::{record_rarest_sold, TreeQuality};
pub use slots::{total_slots, MAX_PREMIUM_SLOTS};
pub use unlock::{location_available, seed_available, RequirementKind, UnlockRequirement};
