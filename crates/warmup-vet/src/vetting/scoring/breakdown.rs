use serde::{Deserialize, Serialize};

pub const STARTING_SCORE: u8 = 100;

/// Audit trail of the penalties applied to a domain.
///
/// Each named field is present only when its penalty fired. `final_score` always equals
/// `clamp(starting_score - total_penalties, 0, 100)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    pub starting_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_too_new: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_mx_record: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_dmarc: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmarc_policy_none: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_captcha: Option<u32>,
    pub total_penalties: u32,
    pub final_score: u8,
}

impl Default for PenaltyBreakdown {
    fn default() -> Self {
        Self {
            starting_score: STARTING_SCORE,
            domain_too_new: None,
            blacklist_penalty: None,
            blacklist_count: None,
            no_mx_record: None,
            no_dmarc: None,
            dmarc_policy_none: None,
            no_captcha: None,
            total_penalties: 0,
            final_score: STARTING_SCORE,
        }
    }
}

impl PenaltyBreakdown {
    /// Breakdown attached to a rejected domain: the whole budget is spent, nothing itemised.
    pub fn exhausted() -> Self {
        Self {
            total_penalties: u32::from(STARTING_SCORE),
            final_score: 0,
            ..Self::default()
        }
    }

    fn penalties(&self) -> [Option<u32>; 6] {
        [
            self.domain_too_new,
            self.blacklist_penalty,
            self.no_mx_record,
            self.no_dmarc,
            self.dmarc_policy_none,
            self.no_captcha,
        ]
    }

    /// Sets `total_penalties` and `final_score` from the itemised penalties, clamping to 0..=100.
    pub(crate) fn settle(&mut self) {
        let start = i64::from(self.starting_score);
        let spent: i64 = self
            .penalties()
            .iter()
            .flatten()
            .map(|penalty| i64::from(*penalty))
            .sum();
        let score = (start - spent).clamp(0, start);

        self.final_score = score as u8;
        self.total_penalties = (start - score) as u32;
    }

    /// Short labels for every non-zero penalty, in declaration order.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if self.domain_too_new.unwrap_or(0) > 0 {
            labels.push("new domain".to_string());
        }
        if self.blacklist_penalty.unwrap_or(0) > 0 {
            let count = self.blacklist_count.unwrap_or(0);
            labels.push(format!("{count} blacklist hits"));
        }
        if self.no_mx_record.unwrap_or(0) > 0 {
            labels.push("no MX record".to_string());
        }
        if self.no_dmarc.unwrap_or(0) > 0 {
            labels.push("no DMARC record".to_string());
        }
        if self.dmarc_policy_none.unwrap_or(0) > 0 {
            labels.push("DMARC policy is none".to_string());
        }
        if self.no_captcha.unwrap_or(0) > 0 {
            labels.push("no CAPTCHA".to_string());
        }

        labels
    }
}
