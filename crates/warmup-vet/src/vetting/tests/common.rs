use crate::vetting::{
    BlacklistAnalysis, BlacklistHit, CollectedSignals, DmarcPolicy, EngineConfig, OptInCheck,
    RiskSignals, SelfAttestedOptIn, VetRequest, VettingEngine,
};

pub(super) fn clean_collected() -> CollectedSignals {
    CollectedSignals {
        blacklist_hits: Vec::new(),
        mx_reputation: 85,
        whois_age_days: Some(3650),
        has_https: true,
        website_exists: true,
        has_valid_mx: true,
        has_dmarc: true,
        dmarc_record: Some("v=DMARC1; p=reject; rua=mailto:dmarc@example.com".to_string()),
        safety_flagged: false,
        safety_flag_reason: None,
    }
}

pub(super) fn compliant() -> OptInCheck {
    OptInCheck {
        compliance: true,
        has_captcha: true,
    }
}

pub(super) fn clean_signals() -> RiskSignals {
    RiskSignals {
        has_https: true,
        website_exists: true,
        has_valid_mx: true,
        has_dmarc: true,
        dmarc_policy: Some(DmarcPolicy::Reject),
        safety_flagged: false,
        safety_flag_reason: None,
        opt_in: compliant(),
        whois_age_days: Some(3650),
        mx_reputation: 85,
        blacklist: BlacklistAnalysis::default(),
    }
}

pub(super) fn attested() -> SelfAttestedOptIn {
    SelfAttestedOptIn {
        has_optin: true,
        has_captcha: true,
    }
}

pub(super) fn request(domain: &str, signals: CollectedSignals) -> VetRequest {
    VetRequest {
        domain: domain.to_string(),
        signals,
        self_attested: Some(attested()),
    }
}

pub(super) fn engine() -> VettingEngine {
    VettingEngine::new(EngineConfig::default())
}

pub(super) fn hits(sources: &[&str]) -> Vec<BlacklistHit> {
    sources.iter().map(|source| BlacklistHit::listed(*source)).collect()
}
