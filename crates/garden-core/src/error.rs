//! Engine error types

use thiserror::Error;

/// Rule violations detected by the economy engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Time reduction too high. Max {max}s for {clicks} clicks")]
    ReductionTooHigh { clicks: u32, max: i64 },

    #[error("Tree is already ready to harvest")]
    TreeAlreadyReady,

    #[error("Tree is not ready yet. Wait {seconds_left} more seconds.")]
    TreeNotReady { seconds_left: i64 },

    #[error("You have reached the daily ad limit ({max} ads per day). Try again tomorrow!")]
    DailyAdLimitReached { max: u32 },

    #[error("Unknown tree quality '{0}'")]
    UnknownQuality(String),

    #[error("Unknown unlock requirement kind '{0}'")]
    UnknownRequirementKind(String),
}
