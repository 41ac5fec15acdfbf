use serde::{Deserialize, Serialize};

use super::blacklist::BlacklistAnalysis;

/// One observation from a DNS- or API-based blacklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistHit {
    pub source: String,
    pub listed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BlacklistHit {
    pub fn listed(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            listed: true,
            info: None,
            reason: None,
        }
    }
}

/// Customer-supplied statement about how the mailing list was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfAttestedOptIn {
    pub has_optin: bool,
    pub has_captcha: bool,
}

/// Resolved opt-in posture used by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptInCheck {
    pub compliance: bool,
    pub has_captcha: bool,
}

/// Values assumed when the caller did not attest to its opt-in practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptInDefaults {
    pub compliant: bool,
    pub has_captcha: bool,
}

impl OptInDefaults {
    pub fn resolve(&self, attested: Option<&SelfAttestedOptIn>) -> OptInCheck {
        match attested {
            Some(attested) => OptInCheck {
                compliance: attested.has_optin,
                has_captcha: attested.has_captcha,
            },
            None => OptInCheck {
                compliance: self.compliant,
                has_captcha: self.has_captcha,
            },
        }
    }
}

/// Signals gathered by the external lookups for a single domain.
///
/// The transport booleans are required; the reputation score, WHOIS age and safety flag may be
/// absent when the upstream provider did not answer, and absence never counts against the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedSignals {
    #[serde(default)]
    pub blacklist_hits: Vec<BlacklistHit>,
    /// Sender reputation 0..=100, where 0 means the provider returned nothing.
    #[serde(default)]
    pub mx_reputation: u8,
    #[serde(default)]
    pub whois_age_days: Option<u32>,
    pub has_https: bool,
    pub website_exists: bool,
    pub has_valid_mx: bool,
    pub has_dmarc: bool,
    #[serde(default)]
    pub dmarc_record: Option<String>,
    #[serde(default)]
    pub safety_flagged: bool,
    #[serde(default)]
    pub safety_flag_reason: Option<String>,
}

/// Enforcement tier published in a DMARC record's `p=` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DmarcPolicy {
    None,
    Quarantine,
    Reject,
}

impl DmarcPolicy {
    /// Reads the domain policy tag; `sp=` and unknown values are ignored.
    pub fn from_record(record: &str) -> Option<Self> {
        record
            .split(';')
            .filter_map(|tag| tag.split_once('='))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("p"))
            .and_then(|(_, value)| match value.trim().to_ascii_lowercase().as_str() {
                "none" => Some(Self::None),
                "quarantine" => Some(Self::Quarantine),
                "reject" => Some(Self::Reject),
                _ => None,
            })
    }

    pub fn is_monitor_only(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Input bundle for the rejection gate and the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSignals {
    pub has_https: bool,
    pub website_exists: bool,
    pub has_valid_mx: bool,
    pub has_dmarc: bool,
    pub dmarc_policy: Option<DmarcPolicy>,
    pub safety_flagged: bool,
    pub safety_flag_reason: Option<String>,
    pub opt_in: OptInCheck,
    pub whois_age_days: Option<u32>,
    pub mx_reputation: u8,
    pub blacklist: BlacklistAnalysis,
}

impl RiskSignals {
    pub fn from_collected(
        signals: &CollectedSignals,
        opt_in: OptInCheck,
        blacklist: BlacklistAnalysis,
    ) -> Self {
        let dmarc_policy = signals
            .dmarc_record
            .as_deref()
            .and_then(DmarcPolicy::from_record);

        Self {
            has_https: signals.has_https,
            website_exists: signals.website_exists,
            has_valid_mx: signals.has_valid_mx,
            has_dmarc: signals.has_dmarc,
            dmarc_policy,
            safety_flagged: signals.safety_flagged,
            safety_flag_reason: signals.safety_flag_reason.clone(),
            opt_in,
            whois_age_days: signals.whois_age_days,
            mx_reputation: signals.mx_reputation,
            blacklist,
        }
    }
}

const TWO_LEVEL_SUFFIXES: &[&str] = &[
    "co.uk", "co.in", "com.au", "com.br", "co.nz", "co.za", "org.uk", "net.au", "org.au", "ac.uk",
    "gov.uk",
];

/// Lower-cases the input and strips scheme, `www.` and trailing slash.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_ascii_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    without_www.trim_end_matches('/').to_string()
}

/// Returns the registrable parent when `domain` is a subdomain.
pub fn parent_domain(domain: &str) -> Option<String> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 3 {
        return None;
    }

    let last_two = labels[labels.len() - 2..].join(".");
    if TWO_LEVEL_SUFFIXES.contains(&last_two.as_str()) {
        if labels.len() < 4 {
            return None;
        }
        return Some(labels[labels.len() - 3..].join("."));
    }

    Some(last_two)
}

/// Human-readable advice about the published DMARC record, if any is warranted.
pub fn dmarc_warning(has_dmarc: bool, record: Option<&str>) -> Option<String> {
    if !has_dmarc {
        return Some(
            "CRITICAL: DMARC record is missing. Email authentication will fail. Please add a DMARC record."
                .to_string(),
        );
    }

    let record = record.unwrap_or_default();
    if DmarcPolicy::from_record(record).is_some_and(DmarcPolicy::is_monitor_only) {
        return Some(
            "WARNING: DMARC policy is set to 'none'. Consider upgrading to 'quarantine' or 'reject' for better protection."
                .to_string(),
        );
    }

    if !record.to_ascii_lowercase().contains("rua=") {
        return Some(
            "WARNING: DMARC record is missing 'rua' (aggregate reporting). Consider adding for monitoring."
                .to_string(),
        );
    }

    None
}
