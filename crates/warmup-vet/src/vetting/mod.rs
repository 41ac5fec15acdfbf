//! Domain vetting: blacklist classification, hard-reject gate and weighted risk scoring.
//!
//! Every stage is a pure function of the signals handed to it. Lookups (DNS, WHOIS, HTTP
//! probes, reputation APIs) happen upstream and arrive here as [`CollectedSignals`].

pub mod blacklist;
pub mod domain;
mod engine;
pub mod gate;
mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use blacklist::{BlacklistAnalysis, BlacklistClassifier, BlacklistPolicy};
pub use domain::{
    normalize_domain, parent_domain, BlacklistHit, CollectedSignals, DmarcPolicy, OptInCheck,
    OptInDefaults, RiskSignals, SelfAttestedOptIn,
};
pub use engine::{EngineConfig, VetRequest, VettingEngine, VettingRequestError};
pub use gate::{GateOutcome, RejectionGate, RejectionReason};
pub use report::{EmailSecurityView, VettingReport, WebsiteView};
pub use router::vetting_router;
pub use scoring::{
    PenaltyBreakdown, RiskLevel, RiskScorer, RiskSummary, ScoringConfig, ScoringThresholds,
    ScoringWeights,
};
