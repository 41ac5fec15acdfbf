use super::common::*;
use crate::vetting::{BlacklistAnalysis, RejectionGate, RejectionReason};

#[test]
fn clean_domain_passes_the_gate() {
    let outcome = RejectionGate::default().evaluate(&clean_signals());

    assert!(!outcome.is_rejected());
    assert_eq!(outcome.summary(), None);
}

#[test]
fn unknown_reputation_is_not_held_against_the_domain() {
    let gate = RejectionGate::default();
    let mut signals = clean_signals();

    signals.mx_reputation = 0;
    assert!(!gate.evaluate(&signals).is_rejected());

    signals.mx_reputation = 40;
    assert!(!gate.evaluate(&signals).is_rejected());

    signals.mx_reputation = 39;
    let outcome = gate.evaluate(&signals);
    assert_eq!(
        outcome.reasons,
        vec![RejectionReason::LowReputation {
            score: 39,
            floor: 40
        }]
    );
    assert_eq!(
        outcome.summary().as_deref(),
        Some("MX reputation too low (below 40)")
    );
}

#[test]
fn every_failing_condition_is_reported() {
    let mut signals = clean_signals();
    signals.blacklist = BlacklistAnalysis {
        is_rejected: true,
        reject_reason: Some("Domain is blacklisted on critical list(s): multi.surbl.org".to_string()),
        critical_hits: vec!["multi.surbl.org".to_string()],
        total_penalty: 0,
        penalty_details: Vec::new(),
    };
    signals.mx_reputation = 12;
    signals.website_exists = false;
    signals.has_https = false;
    signals.safety_flagged = true;
    signals.safety_flag_reason = Some("MALWARE".to_string());

    let outcome = RejectionGate::default().evaluate(&signals);

    assert_eq!(outcome.reasons.len(), 5);
    assert_eq!(
        outcome.summary().as_deref(),
        Some(
            "Domain is blacklisted on critical list(s): multi.surbl.org; \
             MX reputation too low (below 40); \
             Website does not exist or is not accessible; \
             HTTPS is not enabled on the domain; \
             Safe browsing check flagged this domain as unsafe: MALWARE"
        )
    );
}

#[test]
fn safety_flag_without_detail_uses_plain_wording() {
    let mut signals = clean_signals();
    signals.safety_flagged = true;
    signals.safety_flag_reason = Some("  ".to_string());

    let outcome = RejectionGate::default().evaluate(&signals);

    assert_eq!(
        outcome.summary().as_deref(),
        Some("Safe browsing check flagged this domain as unsafe")
    );
}

#[test]
fn reputation_floor_is_configurable() {
    let mut signals = clean_signals();
    signals.mx_reputation = 55;

    assert!(RejectionGate::new(60).evaluate(&signals).is_rejected());
    assert!(!RejectionGate::new(50).evaluate(&signals).is_rejected());
}
