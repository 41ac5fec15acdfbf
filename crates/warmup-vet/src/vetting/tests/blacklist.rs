use super::common::*;
use crate::vetting::blacklist::{BlacklistPolicy, NamedPenalty};
use crate::vetting::{BlacklistClassifier, BlacklistHit};

fn classifier() -> BlacklistClassifier {
    BlacklistClassifier::new(BlacklistPolicy::default())
}

#[test]
fn critical_listing_rejects_without_penalty() {
    let analysis = classifier().classify(&hits(&["zen.spamhaus.org"]));

    assert!(analysis.is_rejected);
    assert_eq!(analysis.total_penalty, 0);
    assert!(analysis.penalty_details.is_empty());
    assert_eq!(analysis.critical_hits, vec!["zen.spamhaus.org".to_string()]);
    assert_eq!(
        analysis.reject_reason.as_deref(),
        Some("Domain is blacklisted on critical list(s): zen.spamhaus.org")
    );
}

#[test]
fn reject_reason_names_every_critical_source() {
    let analysis = classifier().classify(&hits(&["zen.spamhaus.org", "multi.surbl.org"]));

    assert_eq!(
        analysis.reject_reason.as_deref(),
        Some("Domain is blacklisted on critical list(s): zen.spamhaus.org, multi.surbl.org")
    );
}

#[test]
fn unlisted_entries_are_ignored() {
    let entries = vec![BlacklistHit {
        source: "zen.spamhaus.org".to_string(),
        listed: false,
        info: None,
        reason: None,
    }];

    let analysis = classifier().classify(&entries);

    assert!(!analysis.is_rejected);
    assert_eq!(analysis.total_penalty, 0);
    assert!(analysis.reject_reason.is_none());
}

#[test]
fn tiered_listings_scale_with_level() {
    let analysis = classifier().classify(&hits(&[
        "dnsbl-1.uceprotect.net",
        "dnsbl-2.uceprotect.net",
        "dnsbl-3.uceprotect.net",
    ]));

    assert!(!analysis.is_rejected);
    assert_eq!(analysis.total_penalty, 35);
    assert_eq!(
        analysis.penalty_details,
        vec![
            "dnsbl-1.uceprotect.net (Level 1: -5)".to_string(),
            "dnsbl-2.uceprotect.net (Level 2: -10)".to_string(),
            "dnsbl-3.uceprotect.net (Level 3: -20)".to_string(),
        ]
    );
}

#[test]
fn named_and_unknown_listings_use_their_tables() {
    let analysis = classifier().classify(&hits(&[
        "bl.spamcop.net",
        "VadeSecure",
        "b.barracudacentral.org",
        "psbl.surriel.com",
    ]));

    assert_eq!(analysis.total_penalty, 10 + 30 + 10 + 10);
    assert_eq!(analysis.penalized_hits(), 4);
    assert_eq!(analysis.penalty_details[1], "VadeSecure (-30)");
    assert_eq!(analysis.penalty_details[3], "psbl.surriel.com (-10)");
}

#[test]
fn critical_match_wins_over_penalty_tables() {
    let analysis = classifier().classify(&hits(&["spamhaus-uceprotect-level3", "bl.spamcop.net"]));

    assert!(analysis.is_rejected);
    assert_eq!(analysis.critical_hits.len(), 1);
    assert_eq!(analysis.total_penalty, 10);
    assert_eq!(analysis.penalty_details, vec!["bl.spamcop.net (-10)".to_string()]);
}

#[test]
fn policy_tables_can_be_replaced() {
    let mut policy = BlacklistPolicy::default();
    policy.named.insert(
        0,
        NamedPenalty {
            pattern: "mailspike".to_string(),
            penalty: 25,
        },
    );
    policy.default_penalty = 3;

    let analysis = BlacklistClassifier::new(policy).classify(&hits(&[
        "bl.mailspike.net",
        "dnsbl.sorbs.net",
    ]));

    assert_eq!(analysis.total_penalty, 28);
}
