use serde::{Deserialize, Serialize};

use super::exact_target::ExactTargetRule;

/// Multipliers of `target / 30` for the reference 30-day curve, one per day.
pub const REFERENCE_MULTIPLIERS: [f64; 40] = [
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    0.8,
    5.0 / 6.0,
    1.0,
    1.2,
    1.4,
    1.8,
    2.2,
    2.4,
    2.8,
    3.2,
    3.5,
    4.0,
    4.5,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
    11.0,
    13.0,
    15.0,
    20.0,
    25.0,
    30.0,
    40.0,
    50.0,
    60.0,
    70.0,
    80.0,
    90.0,
    100.0,
    110.0,
    130.0,
    150.0,
];

/// Divisors for the opening days shared by the accelerated and extended curves.
pub const RAMP_DIVISORS: [f64; 9] = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.5, 1.2, 1.0];

/// Accelerated curve multipliers for day 10 onwards; applied twice per day.
#[rustfmt::skip]
pub const ACCELERATED_MULTIPLIERS: [f64; 51] = [
    1.2, 1.4, 1.8, 2.2, 2.4, 2.8, 3.2, 3.5, 4.0, 4.5, 5.0,
    6.0, 7.0, 8.0, 9.0, 11.0, 13.0, 15.0, 20.0, 25.0, 30.0,
    40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 130.0, 150.0,
    30.0, 33.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
    75.0, 80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0,
];

/// Extended curve multipliers for day 10 onwards; applied once per day.
#[rustfmt::skip]
pub const EXTENDED_MULTIPLIERS: [f64; 51] = [
    1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.4, 2.6, 2.8, 3.0,
    3.5, 4.0, 4.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
    13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 20.0, 22.0, 25.0, 28.0,
    30.0, 33.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
    75.0, 80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0,
];

/// Hand-tuned constants behind the three warm-up curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupTables {
    pub reference: Vec<f64>,
    pub ramp_divisors: Vec<f64>,
    pub accelerated: Vec<f64>,
    pub extended: Vec<f64>,
    pub exact_targets: Vec<ExactTargetRule>,
}

impl Default for WarmupTables {
    fn default() -> Self {
        Self {
            reference: REFERENCE_MULTIPLIERS.to_vec(),
            ramp_divisors: RAMP_DIVISORS.to_vec(),
            accelerated: ACCELERATED_MULTIPLIERS.to_vec(),
            extended: EXTENDED_MULTIPLIERS.to_vec(),
            exact_targets: ExactTargetRule::defaults(),
        }
    }
}

impl WarmupTables {
    pub fn exact_target_for(&self, period: u32) -> Option<&ExactTargetRule> {
        self.exact_targets.iter().find(|rule| rule.period == period)
    }
}
