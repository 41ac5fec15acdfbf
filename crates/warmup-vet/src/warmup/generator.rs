use tracing::debug;

use super::exact_target::CurveKind;
use super::tables::WarmupTables;
use super::{WarmupDay, WarmupPlans};

pub const DEFAULT_PERIOD_DAYS: u32 = 30;
pub const MAX_PERIOD_DAYS: u32 = 60;
const REFERENCE_PERIOD_DAYS: f64 = 30.0;

/// Round half away from zero; non-positive and non-finite values become 0.
pub fn round_half_up(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value + 0.5).floor() as u64
}

/// Missing or non-positive periods fall back to 30 days; longer ones cap at 60.
pub fn clamp_period(days: i64) -> u32 {
    if days <= 0 {
        DEFAULT_PERIOD_DAYS
    } else if days > i64::from(MAX_PERIOD_DAYS) {
        MAX_PERIOD_DAYS
    } else {
        days as u32
    }
}

#[derive(Debug, Clone, Default)]
pub struct WarmupScheduleGenerator {
    tables: WarmupTables,
}

impl WarmupScheduleGenerator {
    pub fn new(tables: WarmupTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &WarmupTables {
        &self.tables
    }

    /// Builds all three curves for `target_volume` reached over `days`.
    ///
    /// The reference curve always covers 60 days. The two custom-period curves cover the
    /// clamped period; periods with an exact-target rule replace one of them with a curve
    /// whose final day equals `target_volume`.
    pub fn generate(&self, target_volume: u64, days: i64) -> WarmupPlans {
        let period = clamp_period(days);
        let target = target_volume as f64;
        let median_custom = target / f64::from(period);
        let median_reference = target / REFERENCE_PERIOD_DAYS;
        let factor = REFERENCE_PERIOD_DAYS / f64::from(period);

        let plan_30_day = (1..=MAX_PERIOD_DAYS)
            .map(|day| WarmupDay {
                day,
                limit: self.reference_limit(day, median_reference),
            })
            .collect();

        let mut plan_less_than_30: Vec<WarmupDay> = (1..=period)
            .map(|day| WarmupDay {
                day,
                limit: self.accelerated_limit(day, median_custom, factor),
            })
            .collect();

        let mut plan_greater_than_30: Vec<WarmupDay> = (1..=period)
            .map(|day| WarmupDay {
                day,
                limit: self.extended_limit(day, median_custom, factor),
            })
            .collect();

        if let Some(rule) = self.tables.exact_target_for(period) {
            debug!(period, curve = ?rule.replaces, "applying exact-target curve");
            let exact = rule.plan(target_volume);
            match rule.replaces {
                CurveKind::Accelerated => plan_less_than_30 = exact,
                CurveKind::Extended => plan_greater_than_30 = exact,
            }
        }

        debug!(target_volume, period, "warm-up plans generated");

        WarmupPlans {
            plan_30_day,
            plan_less_than_30,
            plan_greater_than_30,
        }
    }

    fn reference_limit(&self, day: u32, median_reference: f64) -> u64 {
        self.tables
            .reference
            .get(day as usize - 1)
            .map(|multiplier| round_half_up(median_reference * multiplier))
            .unwrap_or(0)
    }

    fn ramp_limit(&self, day: u32, median_custom: f64, factor: f64) -> Option<u64> {
        self.tables
            .ramp_divisors
            .get(day as usize - 1)
            .map(|divisor| round_half_up((median_custom / divisor) * factor))
    }

    fn tail_index(&self, day: u32) -> usize {
        day as usize - self.tables.ramp_divisors.len() - 1
    }

    fn accelerated_limit(&self, day: u32, median_custom: f64, factor: f64) -> u64 {
        if let Some(limit) = self.ramp_limit(day, median_custom, factor) {
            return limit;
        }
        self.tables
            .accelerated
            .get(self.tail_index(day))
            .map(|multiplier| round_half_up(((median_custom * multiplier) * factor) * multiplier))
            .unwrap_or(0)
    }

    fn extended_limit(&self, day: u32, median_custom: f64, factor: f64) -> u64 {
        if let Some(limit) = self.ramp_limit(day, median_custom, factor) {
            return limit;
        }
        self.tables
            .extended
            .get(self.tail_index(day))
            .map(|multiplier| round_half_up((median_custom * multiplier) * factor))
            .unwrap_or(0)
    }
}
