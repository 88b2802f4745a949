//! Shared application state for the mirror server.

use std::sync::Arc;

use mirror_core::{Sampler, SeededSampler};

use crate::config::MirrorConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: MirrorConfig,
    sampler: Arc<dyn Sampler>,
}

impl AppState {
    /// State with the process-wide seeded sampler.
    pub fn new(cfg: MirrorConfig) -> Self {
        Self::with_sampler(cfg, Arc::new(SeededSampler::default()))
    }

    /// State with an injected sampler (deterministic fixtures in tests).
    pub fn with_sampler(cfg: MirrorConfig, sampler: Arc<dyn Sampler>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, sampler }),
        }
    }

    pub fn cfg(&self) -> &MirrorConfig {
        &self.inner.cfg
    }

    pub fn sampler(&self) -> &dyn Sampler {
        self.inner.sampler.as_ref()
    }
}
