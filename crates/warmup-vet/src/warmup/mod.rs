//! Day-by-day sending limits for ramping a new domain up to a target volume.

mod exact_target;
mod export;
mod generator;
pub mod router;
pub mod tables;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use exact_target::{
    period_adjuster, CurveKind, DecrementLayout, ExactTargetRule, InitialAdjuster,
};
pub use export::write_csv;
pub use generator::{
    clamp_period, round_half_up, WarmupScheduleGenerator, DEFAULT_PERIOD_DAYS, MAX_PERIOD_DAYS,
};
pub use router::warmup_router;
pub use tables::WarmupTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupDay {
    pub day: u32,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupPlans {
    pub plan_30_day: Vec<WarmupDay>,
    pub plan_less_than_30: Vec<WarmupDay>,
    pub plan_greater_than_30: Vec<WarmupDay>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WarmupRequestError {
    #[error("target_volume must be positive (got {0})")]
    NonPositiveVolume(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupRequest {
    pub target_volume: i64,
    /// Warm-up period; 0 or missing means the default 30 days.
    #[serde(default)]
    pub days: i64,
}

impl WarmupRequest {
    /// Returns the target volume once it is known to be positive.
    pub fn validate(&self) -> Result<u64, WarmupRequestError> {
        if self.target_volume <= 0 {
            return Err(WarmupRequestError::NonPositiveVolume(self.target_volume));
        }
        Ok(self.target_volume as u64)
    }
}
