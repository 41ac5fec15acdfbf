mod breakdown;
mod config;

pub use breakdown::{PenaltyBreakdown, STARTING_SCORE};
pub use config::{ScoringConfig, ScoringThresholds, ScoringWeights};

use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::RiskSignals;
use super::gate::GateOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high-risk")]
    HighRisk,
    #[serde(rename = "rejected")]
    Rejected,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Good => "good",
            RiskLevel::Medium => "medium",
            RiskLevel::HighRisk => "high-risk",
            RiskLevel::Rejected => "rejected",
        }
    }

    /// Whether a warm-up plan should be offered for this level.
    pub fn permits_warmup(&self) -> bool {
        !matches!(self, RiskLevel::Rejected)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The engine's verdict for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub score: u8,
    pub level: RiskLevel,
    pub reason: String,
    pub breakdown: PenaltyBreakdown,
}

/// Weighted scorer applied to domains that passed the rejection gate.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, signals: &RiskSignals, gate: &GateOutcome) -> RiskSummary {
        if let Some(reasons) = gate.summary() {
            return RiskSummary {
                score: 0,
                level: RiskLevel::Rejected,
                reason: format!("REJECTED: {reasons}"),
                breakdown: PenaltyBreakdown::exhausted(),
            };
        }

        let breakdown = self.breakdown(signals);
        let score = breakdown.final_score;

        let level = if !signals.opt_in.compliance {
            RiskLevel::HighRisk
        } else {
            self.level_for(score)
        };

        let mut issues = breakdown.labels();
        if !signals.opt_in.compliance {
            issues.push("opt-in non-compliant".to_string());
        }

        let reason = if issues.is_empty() {
            "All checks passed".to_string()
        } else {
            format!(
                "Score: {}, Level: {}. Issues: {}",
                score,
                level,
                issues.join(", ")
            )
        };

        RiskSummary {
            score,
            level,
            reason,
            breakdown,
        }
    }

    pub fn level_for(&self, score: u8) -> RiskLevel {
        let thresholds = &self.config.thresholds;
        if score <= thresholds.high_risk_max {
            RiskLevel::HighRisk
        } else if score <= thresholds.medium_max {
            RiskLevel::Medium
        } else {
            RiskLevel::Good
        }
    }

    fn breakdown(&self, signals: &RiskSignals) -> PenaltyBreakdown {
        let weights = &self.config.weights;
        let applied = |fired: bool, weight: u32| (fired && weight > 0).then_some(weight);

        let too_new = signals
            .whois_age_days
            .is_some_and(|days| days < self.config.new_domain_age_days);
        let blacklist_total = signals.blacklist.total_penalty;
        let weak_dmarc = signals.has_dmarc
            && signals
                .dmarc_policy
                .is_some_and(|policy| policy.is_monitor_only());

        let mut breakdown = PenaltyBreakdown {
            domain_too_new: applied(too_new, weights.domain_too_new),
            blacklist_penalty: (blacklist_total > 0).then_some(blacklist_total),
            blacklist_count: (blacklist_total > 0)
                .then(|| signals.blacklist.penalized_hits() as u32),
            no_mx_record: applied(!signals.has_valid_mx, weights.no_mx_record),
            no_dmarc: applied(!signals.has_dmarc, weights.no_dmarc),
            dmarc_policy_none: applied(weak_dmarc, weights.dmarc_policy_none),
            no_captcha: applied(!signals.opt_in.has_captcha, weights.no_captcha),
            ..PenaltyBreakdown::default()
        };
        breakdown.settle();
        breakdown
    }
}
