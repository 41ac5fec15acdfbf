//! Warm-up curves that land exactly on the target volume on the final day.
//!
//! Each day's limit is `target / T[day]`, where the "total adjuster" `T` starts in the
//! hundreds and falls to exactly 1 on the last day. The daily decrements follow a
//! Fibonacci-like run (144, 89, 55, ...) rescaled to sum to `T[1] - 1`.

use serde::{Deserialize, Serialize};

use super::generator::round_half_up;
use super::WarmupDay;

const DECREMENT_RUN: [f64; 10] = [144.0, 89.0, 55.0, 34.0, 21.0, 13.0, 8.0, 5.0, 3.0, 2.0];

const PERIOD_ADJUSTER_BASE: f64 = 390.0;
const PERIOD_ADJUSTER_PER_THOUSAND: f64 = 0.5;
const PERIOD_ADJUSTER_MIN: f64 = 383.0;
const PERIOD_ADJUSTER_MAX: f64 = 424.0;

/// Which of the custom-period curves an exact-target rule replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Accelerated,
    Extended,
}

/// Starting value of the total adjuster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialAdjuster {
    Fixed { value: f64 },
    /// Period adjuster plus `offset`, clamped to `[min, max]`.
    FromPeriod { offset: f64, min: f64, max: f64 },
}

impl InitialAdjuster {
    fn resolve(&self, period_adjuster: f64) -> f64 {
        match *self {
            InitialAdjuster::Fixed { value } => value,
            InitialAdjuster::FromPeriod { offset, min, max } => {
                (period_adjuster + offset).clamp(min, max)
            }
        }
    }
}

/// How the decrement run is laid out over the period before rescaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecrementLayout {
    /// The run once, then 1s.
    Single,
    /// The run `repeats` times while more than `reserve` days remain, then `tail`, then 1s.
    Spread {
        repeats: usize,
        reserve: usize,
        tail: Vec<f64>,
    },
}

impl DecrementLayout {
    /// Decrements indexed by day offset; offset 0 is always 0.
    fn sequence(&self, period: usize) -> Vec<f64> {
        let mut sequence = vec![1.0; period];
        if period == 0 {
            return sequence;
        }
        sequence[0] = 0.0;

        let mut idx = 1;
        match self {
            DecrementLayout::Single => {
                for term in DECREMENT_RUN {
                    if idx >= period {
                        break;
                    }
                    sequence[idx] = term;
                    idx += 1;
                }
            }
            DecrementLayout::Spread {
                repeats,
                reserve,
                tail,
            } => {
                let limit = period.saturating_sub(*reserve);
                for _ in 0..*repeats {
                    for term in DECREMENT_RUN {
                        if idx >= limit {
                            break;
                        }
                        sequence[idx] = term;
                        idx += 1;
                    }
                }
                for term in tail {
                    if idx >= period {
                        break;
                    }
                    sequence[idx] = *term;
                    idx += 1;
                }
            }
        }

        sequence
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactTargetRule {
    pub period: u32,
    pub replaces: CurveKind,
    pub initial: InitialAdjuster,
    pub layout: DecrementLayout,
}

impl ExactTargetRule {
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                period: 20,
                replaces: CurveKind::Accelerated,
                initial: InitialAdjuster::Fixed { value: 385.0 },
                layout: DecrementLayout::Single,
            },
            Self {
                period: 45,
                replaces: CurveKind::Extended,
                initial: InitialAdjuster::FromPeriod {
                    offset: 10.0,
                    min: 400.0,
                    max: 450.0,
                },
                layout: DecrementLayout::Spread {
                    repeats: 2,
                    reserve: 15,
                    tail: vec![5.0, 3.0, 2.0],
                },
            },
        ]
    }

    /// Total adjuster per day, from the initial value down to exactly 1.
    pub fn total_adjusters(&self, target_volume: u64) -> Vec<f64> {
        let period = self.period as usize;
        if period == 0 {
            return Vec::new();
        }

        let initial = self
            .initial
            .resolve(period_adjuster(target_volume, self.period));
        let mut decrements = self.layout.sequence(period);

        let sum: f64 = decrements[1..].iter().sum();
        let wanted = initial - 1.0;
        if sum > 0.0 && wanted > 0.0 {
            let scale = wanted / sum;
            for decrement in decrements[1..].iter_mut() {
                *decrement *= scale;
            }
        }

        let mut adjusters = Vec::with_capacity(period);
        adjusters.push(initial);
        for decrement in &decrements[1..] {
            let previous = adjusters[adjusters.len() - 1];
            adjusters.push((previous - decrement).max(1.0));
        }
        adjusters[period - 1] = 1.0;
        adjusters
    }

    /// Day-by-day limits whose last entry is exactly `target_volume`.
    pub fn plan(&self, target_volume: u64) -> Vec<WarmupDay> {
        let target = target_volume as f64;
        let mut plan: Vec<WarmupDay> = self
            .total_adjusters(target_volume)
            .into_iter()
            .enumerate()
            .map(|(offset, adjuster)| WarmupDay {
                day: offset as u32 + 1,
                limit: round_half_up(target / adjuster.max(1.0)),
            })
            .collect();

        if let Some(last) = plan.last_mut() {
            last.limit = target_volume;
        }
        plan
    }
}

/// Smooth function of volume per day, clamped to the tuned band.
pub fn period_adjuster(target_volume: u64, period: u32) -> f64 {
    let per_day = target_volume as f64 / f64::from(period.max(1));
    (PERIOD_ADJUSTER_BASE + (per_day / 1000.0) * PERIOD_ADJUSTER_PER_THOUSAND)
        .clamp(PERIOD_ADJUSTER_MIN, PERIOD_ADJUSTER_MAX)
}
