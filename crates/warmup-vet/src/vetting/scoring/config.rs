use serde::{Deserialize, Serialize};

/// Points removed from the starting score for each failed soft check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub domain_too_new: u32,
    pub no_mx_record: u32,
    pub no_dmarc: u32,
    pub dmarc_policy_none: u32,
    pub no_captcha: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            domain_too_new: 20,
            no_mx_record: 60,
            no_dmarc: 10,
            dmarc_policy_none: 5,
            no_captcha: 50,
        }
    }
}

/// Upper score bounds for each risk level; anything above `medium_max` is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    pub high_risk_max: u8,
    pub medium_max: u8,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            high_risk_max: 40,
            medium_max: 70,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub thresholds: ScoringThresholds,
    /// Domains registered fewer days ago than this take the new-domain penalty.
    pub new_domain_age_days: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: ScoringThresholds::default(),
            new_domain_age_days: 60,
        }
    }
}
