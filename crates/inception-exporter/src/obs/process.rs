//! Standard `process_*` self-metrics (cpu, memory, fds, start time).
//!
//! Values come from `prometheus::process_collector`, which reads `/proc` on
//! every scrape; its families are re-expressed as our own descriptors so they
//! go through the same registry and renderer as everything else. Linux only.

use std::sync::Arc;

use async_trait::async_trait;
use prometheus::core::Collector as _;
use prometheus::proto::{MetricFamily, MetricType};

use super::metrics::{MetricDesc, Sample};
use super::registry::Collector;

pub struct ProcessCollector {
    inner: prometheus::process_collector::ProcessCollector,
}

impl ProcessCollector {
    /// Metrics for the running process, un-namespaced (`process_...`).
    pub fn for_self() -> Self {
        Self {
            inner: prometheus::process_collector::ProcessCollector::for_self(),
        }
    }

    fn samples(&self) -> Vec<Sample> {
        self.inner.collect().iter().flat_map(family_samples).collect()
    }
}

/// Counter and gauge families only; the process collector emits nothing else.
fn family_samples(family: &MetricFamily) -> Vec<Sample> {
    let kind = family.get_field_type();
    let mut out = Vec::new();
    for m in family.get_metric() {
        let (desc, value) = match kind {
            MetricType::COUNTER => (
                MetricDesc::counter("", family.get_name(), family.get_help()),
                m.get_counter().get_value(),
            ),
            MetricType::GAUGE => (
                MetricDesc::gauge("", family.get_name(), family.get_help()),
                m.get_gauge().get_value(),
            ),
            _ => continue,
        };
        let desc = m
            .get_label()
            .iter()
            .fold(desc, |d, l| d.with_label(l.get_name(), l.get_value()));
        out.push(Sample::new(Arc::new(desc), value));
    }
    out
}

#[async_trait]
impl Collector for ProcessCollector {
    async fn describe(&self) -> Vec<Arc<MetricDesc>> {
        self.samples().into_iter().map(|s| s.desc).collect()
    }

    async fn collect(&self) -> Vec<Sample> {
        self.samples()
    }
}
