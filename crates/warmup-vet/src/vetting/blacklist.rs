use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::BlacklistHit;

/// Severity-tiered list (one operator publishing several zones of increasing strictness).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredList {
    /// Substring identifying the operator.
    pub operator: String,
    /// Markers checked from the most to the least severe; unmatched hits fall to level 1.
    pub levels: Vec<TierLevel>,
    pub base_penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLevel {
    pub level: u8,
    pub markers: Vec<String>,
    pub penalty: u32,
}

impl TieredList {
    fn grade(&self, source: &str) -> (u8, u32) {
        self.levels
            .iter()
            .find(|tier| tier.markers.iter().any(|marker| source.contains(marker.as_str())))
            .map(|tier| (tier.level, tier.penalty))
            .unwrap_or((1, self.base_penalty))
    }
}

/// Penalty assigned to a specific listing operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPenalty {
    pub pattern: String,
    pub penalty: u32,
}

/// Lookup tables driving blacklist classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistPolicy {
    /// Operators whose listing is conclusive and forces rejection.
    pub critical: Vec<String>,
    pub tiered: TieredList,
    /// Checked in order, first match wins.
    pub named: Vec<NamedPenalty>,
    pub default_penalty: u32,
}

impl Default for BlacklistPolicy {
    fn default() -> Self {
        let strings = |values: &[&str]| -> Vec<String> {
            values.iter().map(|value| value.to_string()).collect()
        };
        let named = |pattern: &str, penalty: u32| NamedPenalty {
            pattern: pattern.to_string(),
            penalty,
        };

        Self {
            critical: strings(&[
                "spamhaus",
                "ivmurl",
                "invaluement",
                "surbl",
                "abusix",
                "abuse.ch",
                "abuseat",
            ]),
            tiered: TieredList {
                operator: "uceprotect".to_string(),
                levels: vec![
                    TierLevel {
                        level: 3,
                        markers: strings(&["dnsbl-3", "level3", "l3"]),
                        penalty: 20,
                    },
                    TierLevel {
                        level: 2,
                        markers: strings(&["dnsbl-2", "level2", "l2"]),
                        penalty: 10,
                    },
                ],
                base_penalty: 5,
            },
            named: vec![
                named("spamcop", 10),
                named("vadesecure", 30),
                named("barracuda", 10),
                named("barracudacentral", 10),
            ],
            default_penalty: 10,
        }
    }
}

/// Structured verdict over every confirmed listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistAnalysis {
    pub is_rejected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    #[serde(default)]
    pub critical_hits: Vec<String>,
    pub total_penalty: u32,
    #[serde(default)]
    pub penalty_details: Vec<String>,
}

impl BlacklistAnalysis {
    /// Number of listings that carried a numeric penalty.
    pub fn penalized_hits(&self) -> usize {
        self.penalty_details.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlacklistClassifier {
    policy: BlacklistPolicy,
}

impl BlacklistClassifier {
    pub fn new(policy: BlacklistPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BlacklistPolicy {
        &self.policy
    }

    pub fn classify(&self, hits: &[BlacklistHit]) -> BlacklistAnalysis {
        let mut analysis = BlacklistAnalysis::default();

        for hit in hits.iter().filter(|hit| hit.listed) {
            let source = hit.source.to_ascii_lowercase();

            if self.is_critical(&source) {
                warn!(source = %hit.source, "critical blacklist listing");
                analysis.critical_hits.push(hit.source.clone());
                continue;
            }

            let (penalty, detail) = if source.contains(self.policy.tiered.operator.as_str()) {
                let (level, penalty) = self.policy.tiered.grade(&source);
                debug!(source = %hit.source, level, penalty, "tiered blacklist listing");
                (
                    penalty,
                    format!("{} (Level {}: -{})", hit.source, level, penalty),
                )
            } else {
                let penalty = match self.named_penalty(&source) {
                    Some(penalty) => {
                        debug!(source = %hit.source, penalty, "known blacklist listing");
                        penalty
                    }
                    None => {
                        debug!(
                            source = %hit.source,
                            penalty = self.policy.default_penalty,
                            "unrecognised blacklist listing"
                        );
                        self.policy.default_penalty
                    }
                };
                (penalty, format!("{} (-{})", hit.source, penalty))
            };

            analysis.total_penalty += penalty;
            analysis.penalty_details.push(detail);
        }

        if !analysis.critical_hits.is_empty() {
            analysis.is_rejected = true;
            analysis.reject_reason = Some(format!(
                "Domain is blacklisted on critical list(s): {}",
                analysis.critical_hits.join(", ")
            ));
        }

        analysis
    }

    fn is_critical(&self, source: &str) -> bool {
        self.policy
            .critical
            .iter()
            .any(|pattern| source.contains(pattern.as_str()))
    }

    fn named_penalty(&self, source: &str) -> Option<u32> {
        self.policy
            .named
            .iter()
            .find(|entry| source.contains(entry.pattern.as_str()))
            .map(|entry| entry.penalty)
    }
}
