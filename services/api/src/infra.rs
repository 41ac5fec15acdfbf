use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use warmup_vet::config::AppConfig;
use warmup_vet::vetting::{EngineConfig, VettingEngine};
use warmup_vet::warmup::WarmupScheduleGenerator;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, immutable engines handed to the routers.
#[derive(Clone, Default)]
pub(crate) struct Engines {
    pub(crate) vetting: Arc<VettingEngine>,
    pub(crate) warmup: Arc<WarmupScheduleGenerator>,
}

impl Engines {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            vetting: Arc::new(VettingEngine::new(EngineConfig::from(&config.vetting))),
            warmup: Arc::new(WarmupScheduleGenerator::default()),
        }
    }
}
