use crate::vetting::domain::dmarc_warning;
use crate::vetting::{normalize_domain, parent_domain, DmarcPolicy, OptInDefaults};

use super::common::attested;

#[test]
fn normalize_strips_scheme_www_and_slash() {
    assert_eq!(normalize_domain("  HTTPS://www.Example.com/ "), "example.com");
    assert_eq!(normalize_domain("http://mail.example.org"), "mail.example.org");
    assert_eq!(normalize_domain("   "), "");
}

#[test]
fn parent_domain_handles_two_level_suffixes() {
    assert_eq!(parent_domain("example.com"), None);
    assert_eq!(parent_domain("news.example.com"), Some("example.com".to_string()));
    assert_eq!(parent_domain("example.co.uk"), None);
    assert_eq!(
        parent_domain("mail.example.co.uk"),
        Some("example.co.uk".to_string())
    );
}

#[test]
fn dmarc_policy_reads_only_the_domain_tag() {
    assert_eq!(
        DmarcPolicy::from_record("v=DMARC1; sp=none; p=reject"),
        Some(DmarcPolicy::Reject)
    );
    assert_eq!(
        DmarcPolicy::from_record("v=DMARC1; P=None; rua=mailto:x@example.com"),
        Some(DmarcPolicy::None)
    );
    assert_eq!(DmarcPolicy::from_record("v=DMARC1"), None);
}

#[test]
fn dmarc_warning_escalates_by_problem() {
    let missing = dmarc_warning(false, None).expect("missing record warns");
    assert!(missing.starts_with("CRITICAL"));

    let monitor = dmarc_warning(true, Some("v=DMARC1; p=none; rua=mailto:x@example.com"))
        .expect("monitor-only warns");
    assert!(monitor.contains("'none'"));

    let no_reports = dmarc_warning(true, Some("v=DMARC1; p=quarantine")).expect("no rua warns");
    assert!(no_reports.contains("rua"));

    assert_eq!(
        dmarc_warning(true, Some("v=DMARC1; p=reject; rua=mailto:x@example.com")),
        None
    );
}

#[test]
fn opt_in_defaults_apply_only_without_attestation() {
    let defaults = OptInDefaults {
        compliant: false,
        has_captcha: true,
    };

    let fallback = defaults.resolve(None);
    assert!(!fallback.compliance);
    assert!(fallback.has_captcha);

    let attested = defaults.resolve(Some(&attested()));
    assert!(attested.compliance);
}
