//! Lookback configuration.

use serde::{Deserialize, Serialize};

/// Default distance, in days, between the end timestamp and the lookback floor.
pub const DEFAULT_MAX_LOOKBACK_DAYS: u32 = 365;

/// What to do when the lookback floor is reached before the target count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Return the cursor where the walk stopped.
    #[default]
    Clamp,
    /// Fail with [`BizTimeError::InsufficientHistory`](biztime_types::BizTimeError::InsufficientHistory).
    Error,
}

/// Configuration for the backward walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookbackConfig {
    /// How far before the end timestamp the walk may go, in days.
    pub max_lookback_days: u32,
    /// Behavior when the floor is reached first.
    pub on_exhausted: ExhaustionPolicy,
}

impl Default for LookbackConfig {
    fn default() -> Self {
        Self {
            max_lookback_days: DEFAULT_MAX_LOOKBACK_DAYS,
            on_exhausted: ExhaustionPolicy::Clamp,
        }
    }
}

impl LookbackConfig {
    /// Sets the lookback distance in days.
    #[must_use]
    pub const fn with_max_lookback_days(mut self, days: u32) -> Self {
        self.max_lookback_days = days;
        self
    }

    /// Sets the exhaustion policy.
    #[must_use]
    pub const fn with_on_exhausted(mut self, policy: ExhaustionPolicy) -> Self {
        self.on_exhausted = policy;
        self
    }
}
