use serde::{Deserialize, Serialize};

use super::domain::RiskSignals;

/// Hard-fail condition that stops a domain from being scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    CriticalBlacklist { detail: String },
    LowReputation { score: u8, floor: u8 },
    WebsiteUnreachable,
    HttpsMissing,
    SafetyFlagged { detail: Option<String> },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::CriticalBlacklist { detail } => detail.clone(),
            RejectionReason::LowReputation { floor, .. } => {
                format!("MX reputation too low (below {floor})")
            }
            RejectionReason::WebsiteUnreachable => {
                "Website does not exist or is not accessible".to_string()
            }
            RejectionReason::HttpsMissing => "HTTPS is not enabled on the domain".to_string(),
            RejectionReason::SafetyFlagged { detail: Some(detail) } => {
                format!("Safe browsing check flagged this domain as unsafe: {detail}")
            }
            RejectionReason::SafetyFlagged { detail: None } => {
                "Safe browsing check flagged this domain as unsafe".to_string()
            }
        }
    }
}

/// Every failing condition found by the gate, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOutcome {
    pub reasons: Vec<RejectionReason>,
}

impl GateOutcome {
    pub fn is_rejected(&self) -> bool {
        !self.reasons.is_empty()
    }

    /// Failing reasons joined with `"; "`, or `None` when the domain passed.
    pub fn summary(&self) -> Option<String> {
        if self.reasons.is_empty() {
            return None;
        }
        Some(
            self.reasons
                .iter()
                .map(RejectionReason::summary)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

pub const DEFAULT_REPUTATION_FLOOR: u8 = 40;

#[derive(Debug, Clone)]
pub struct RejectionGate {
    reputation_floor: u8,
}

impl Default for RejectionGate {
    fn default() -> Self {
        Self::new(DEFAULT_REPUTATION_FLOOR)
    }
}

impl RejectionGate {
    pub fn new(reputation_floor: u8) -> Self {
        Self { reputation_floor }
    }

    /// A reputation of 0 means the provider had no data and passes.
    pub fn reputation_allowed(&self, score: u8) -> bool {
        score == 0 || score >= self.reputation_floor
    }

    pub fn evaluate(&self, signals: &RiskSignals) -> GateOutcome {
        let mut reasons = Vec::new();

        if signals.blacklist.is_rejected {
            let detail = signals
                .blacklist
                .reject_reason
                .clone()
                .unwrap_or_else(|| "Domain is blacklisted on a critical list".to_string());
            reasons.push(RejectionReason::CriticalBlacklist { detail });
        }

        if !self.reputation_allowed(signals.mx_reputation) {
            reasons.push(RejectionReason::LowReputation {
                score: signals.mx_reputation,
                floor: self.reputation_floor,
            });
        }

        if !signals.website_exists {
            reasons.push(RejectionReason::WebsiteUnreachable);
        }

        if !signals.has_https {
            reasons.push(RejectionReason::HttpsMissing);
        }

        if signals.safety_flagged {
            reasons.push(RejectionReason::SafetyFlagged {
                detail: signals
                    .safety_flag_reason
                    .clone()
                    .filter(|detail| !detail.trim().is_empty()),
            });
        }

        GateOutcome { reasons }
    }
}
