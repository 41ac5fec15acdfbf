use serde::{Deserialize, Serialize};

use super::blacklist::BlacklistAnalysis;
use super::domain::{BlacklistHit, OptInCheck};
use super::gate::RejectionReason;
use super::scoring::RiskSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSecurityView {
    pub has_valid_mx: bool,
    pub has_dmarc: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmarc_record: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmarc_warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteView {
    pub exists: bool,
    pub https_ok: bool,
}

/// Full vetting response for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VettingReport {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_domain: Option<String>,
    pub is_subdomain: bool,
    pub is_rejected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    #[serde(default)]
    pub rejection_reasons: Vec<RejectionReason>,
    pub blacklist_hits: Vec<BlacklistHit>,
    pub blacklist_analysis: BlacklistAnalysis,
    pub mx_reputation_ok: bool,
    pub safe_browsing_flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_browsing_reason: Option<String>,
    pub email_security: EmailSecurityView,
    pub website: WebsiteView,
    pub optin: OptInCheck,
    pub summary: RiskSummary,
}

impl VettingReport {
    pub fn permits_warmup(&self) -> bool {
        !self.is_rejected && self.summary.level.permits_warmup()
    }
}
