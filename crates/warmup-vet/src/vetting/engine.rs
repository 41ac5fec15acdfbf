use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::VettingSettings;

use super::blacklist::{BlacklistClassifier, BlacklistPolicy};
use super::domain::{
    dmarc_warning, normalize_domain, parent_domain, CollectedSignals, OptInDefaults, RiskSignals,
    SelfAttestedOptIn,
};
use super::gate::{GateOutcome, RejectionGate, DEFAULT_REPUTATION_FLOOR};
use super::report::{EmailSecurityView, VettingReport, WebsiteView};
use super::scoring::{RiskScorer, RiskSummary, ScoringConfig, ScoringThresholds};

/// Invalid vetting requests, rejected before any scoring happens.
#[derive(Debug, thiserror::Error)]
pub enum VettingRequestError {
    #[error("domain required")]
    MissingDomain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetRequest {
    pub domain: String,
    pub signals: CollectedSignals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_attested: Option<SelfAttestedOptIn>,
}

/// Tables and dials for every stage of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub blacklist: BlacklistPolicy,
    pub scoring: ScoringConfig,
    pub reputation_floor: u8,
    pub opt_in_defaults: OptInDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blacklist: BlacklistPolicy::default(),
            scoring: ScoringConfig::default(),
            reputation_floor: DEFAULT_REPUTATION_FLOOR,
            opt_in_defaults: OptInDefaults::default(),
        }
    }
}

impl From<&VettingSettings> for EngineConfig {
    fn from(settings: &VettingSettings) -> Self {
        let defaults = Self::default();
        Self {
            scoring: ScoringConfig {
                thresholds: ScoringThresholds {
                    high_risk_max: settings.high_risk_max,
                    medium_max: settings.medium_max,
                },
                ..defaults.scoring
            },
            reputation_floor: settings.reputation_floor,
            opt_in_defaults: OptInDefaults {
                compliant: settings.optin_default_compliant,
                has_captcha: settings.optin_default_captcha,
            },
            ..defaults
        }
    }
}

/// Stateless pipeline: classifier, then gate, then scorer.
#[derive(Debug, Clone, Default)]
pub struct VettingEngine {
    classifier: BlacklistClassifier,
    gate: RejectionGate,
    scorer: RiskScorer,
    opt_in_defaults: OptInDefaults,
}

impl VettingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            classifier: BlacklistClassifier::new(config.blacklist),
            gate: RejectionGate::new(config.reputation_floor),
            scorer: RiskScorer::new(config.scoring),
            opt_in_defaults: config.opt_in_defaults,
        }
    }

    pub fn classifier(&self) -> &BlacklistClassifier {
        &self.classifier
    }

    /// Gate and score an already assembled signal bundle.
    pub fn assess(&self, signals: &RiskSignals) -> (GateOutcome, RiskSummary) {
        let gate = self.gate.evaluate(signals);
        let summary = self.scorer.score(signals, &gate);
        (gate, summary)
    }

    pub fn evaluate(&self, request: &VetRequest) -> Result<VettingReport, VettingRequestError> {
        let domain = normalize_domain(&request.domain);
        if domain.is_empty() {
            return Err(VettingRequestError::MissingDomain);
        }
        let parent = parent_domain(&domain);

        let collected = &request.signals;
        let blacklist = self.classifier.classify(&collected.blacklist_hits);
        let opt_in = self.opt_in_defaults.resolve(request.self_attested.as_ref());
        let signals = RiskSignals::from_collected(collected, opt_in, blacklist);

        let (gate, summary) = self.assess(&signals);

        info!(
            %domain,
            score = summary.score,
            risk_level = %summary.level,
            rejected = gate.is_rejected(),
            "domain vetting completed"
        );

        let reject_reason = gate.summary().map(|reasons| format!("REJECTED: {reasons}"));

        Ok(VettingReport {
            is_subdomain: parent.is_some(),
            parent_domain: parent,
            domain,
            is_rejected: gate.is_rejected(),
            reject_reason,
            rejection_reasons: gate.reasons,
            blacklist_hits: collected.blacklist_hits.clone(),
            mx_reputation_ok: self.gate.reputation_allowed(signals.mx_reputation),
            safe_browsing_flagged: signals.safety_flagged,
            safe_browsing_reason: signals.safety_flag_reason.clone(),
            email_security: EmailSecurityView {
                has_valid_mx: signals.has_valid_mx,
                has_dmarc: signals.has_dmarc,
                dmarc_record: collected.dmarc_record.clone(),
                dmarc_warning: dmarc_warning(signals.has_dmarc, collected.dmarc_record.as_deref()),
            },
            website: WebsiteView {
                exists: signals.website_exists,
                https_ok: signals.has_https,
            },
            optin: signals.opt_in,
            blacklist_analysis: signals.blacklist,
            summary,
        })
    }
}
