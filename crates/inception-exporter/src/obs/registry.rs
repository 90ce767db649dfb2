use std::sync::Arc;

use async_trait::async_trait;

use inception_core::error::{InceptionError, Result};

use super::metrics::{MetricDesc, Sample};

/// A source of samples, asked for a fresh set on every scrape.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Descriptors this collector may currently emit.
    async fn describe(&self) -> Vec<Arc<MetricDesc>>;
    async fn collect(&self) -> Vec<Sample>;
}

/// Ordered set of collectors served on the metrics path.
#[derive(Default)]
pub struct CollectorRegistry {
    collectors: Vec<Arc<dyn Collector>>,
    described: Vec<Arc<MetricDesc>>,
}

impl CollectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collector after checking its descriptors against every
    /// family already registered: same name must mean same help, type and
    /// label names, and no series may be claimed twice.
    pub async fn register(&mut self, collector: Arc<dyn Collector>) -> Result<()> {
        let descs = collector.describe().await;

        for d in &descs {
            for known in &self.described {
                if known.fq_name != d.fq_name {
                    continue;
                }
                if known.help != d.help
                    || known.kind != d.kind
                    || known.label_names() != d.label_names()
                {
                    return Err(InceptionError::Registry(format!(
                        "{} already registered with a different help, type or label set",
                        d.fq_name
                    )));
                }
                if known.const_labels == d.const_labels {
                    return Err(InceptionError::Registry(format!(
                        "{} already registered with the same label values",
                        d.fq_name
                    )));
                }
            }
        }

        self.described.extend(descs);
        self.collectors.push(collector);
        Ok(())
    }

    /// Collect from every collector in registration order.
    pub async fn gather(&self) -> Vec<Sample> {
        let mut out = Vec::new();
        for c in &self.collectors {
            out.extend(c.collect().await);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }
}
