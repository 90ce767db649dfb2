//! Shared application state.
//!
//! Built once at startup: the exporter (and the target registry it owns)
//! lives for the whole process and is reached only through this handle.

use std::sync::Arc;

use inception_core::error::Result;

use crate::config::ExporterConfig;
use crate::obs::{BuildInfoCollector, CollectorRegistry};
use crate::targets::{DiscoveryClient, Exporter};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    exporter: Arc<Exporter>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    collectors: CollectorRegistry,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can report a bad upstream config instead of panicking.
    pub async fn new(cfg: ExporterConfig) -> Result<Self> {
        let client = DiscoveryClient::new(&cfg.upstream)?;
        let exporter = Arc::new(Exporter::new(&cfg.namespace, client));

        let mut collectors = CollectorRegistry::new();
        collectors
            .register(Arc::new(BuildInfoCollector::new(&cfg.namespace)))
            .await?;
        collectors.register(exporter.clone()).await?;
        #[cfg(target_os = "linux")]
        collectors
            .register(Arc::new(crate::obs::ProcessCollector::for_self()))
            .await?;

        tracing::debug!(collectors = collectors.len(), "collectors registered");

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, collectors }),
            exporter,
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn collectors(&self) -> &CollectorRegistry {
        &self.inner.collectors
    }

    pub fn exporter(&self) -> Arc<Exporter> {
        Arc::clone(&self.exporter)
    }
}
