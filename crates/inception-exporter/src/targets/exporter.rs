//! Exporter: one upstream poll per scrape, re-published as gauges.
//!
//! Flow of `collect`:
//! 1) lock the shared state (held across the whole poll, network included)
//! 2) fetch + decode `/api/v1/targets`
//! 3) mark every known target disappeared, then re-classify the active list
//! 4) emit every `target_state` series followed by `target_count`
//!
//! A failed poll emits only `target_count 0` and leaves the registry as it was.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use inception_core::error::FetchError;
use inception_core::protocol::targets::{DiscoveryResponse, TargetHealth};

use crate::obs::{Collector, MetricDesc, Sample};

use super::client::DiscoveryClient;
use super::registry::{TargetLabels, TargetRegistry, TargetSnapshot, TargetState};

const TARGET_COUNT_HELP: &str = "Number of targets on Prometheus instance";
const TARGET_STATE_HELP: &str = "Prometheus targets state";

/// Registry and aggregate count, always updated together.
#[derive(Debug, Default)]
struct ExporterState {
    registry: TargetRegistry,
    target_count: u64,
}

impl ExporterState {
    /// Reset-then-mark pass over one decoded response.
    fn apply(&mut self, resp: &DiscoveryResponse) {
        self.registry.mark_all_disappeared();

        let mut count = 0;
        for target in &resp.data.active_targets {
            let url = target.scrape_url.as_str();
            if self.registry.get(url).is_none() {
                self.registry.get_or_create(url, target.job());
                debug!(scrape_url = %url, job = %target.job(), "tracking new target");
            }

            let state = match target.health {
                TargetHealth::Up => TargetState::Up,
                TargetHealth::Down | TargetHealth::Unknown => TargetState::Down,
                TargetHealth::Unrecognized => {
                    debug!(scrape_url = %url, "unrecognized target health; state left as is");
                    continue;
                }
            };
            self.registry.set_state(url, state);
            count += 1;
        }

        self.target_count = count;
    }
}

pub struct Exporter {
    client: DiscoveryClient,
    namespace: String,
    count_desc: Arc<MetricDesc>,
    state: Mutex<ExporterState>,
}

impl Exporter {
    pub fn new(namespace: &str, client: DiscoveryClient) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
            count_desc: Arc::new(MetricDesc::gauge(namespace, "target_count", TARGET_COUNT_HELP)),
            state: Mutex::new(ExporterState::default()),
        }
    }

    fn state_desc(&self, labels: &TargetLabels) -> MetricDesc {
        MetricDesc::gauge(&self.namespace, "target_state", TARGET_STATE_HELP)
            .with_label("job_name", &labels.job_name)
            .with_label("scrape_url", &labels.scrape_url)
    }

    /// Fetch, decode and classify. Nothing in `state` changes unless the
    /// response decoded cleanly.
    async fn poll(&self, state: &mut ExporterState) -> Result<(), FetchError> {
        let started = Instant::now();
        let resp = self.client.fetch().await?;

        if !resp.is_success() {
            warn!(
                status = %resp.status,
                error_type = resp.error_type.as_deref().unwrap_or(""),
                error = resp.error.as_deref().unwrap_or(""),
                "upstream reported a non-success status; using its (possibly empty) target list"
            );
        }

        state.apply(&resp);
        debug!(
            targets = resp.data.active_targets.len(),
            known = state.registry.len(),
            counted = state.target_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "upstream poll complete"
        );
        Ok(())
    }

    /// Current aggregate count, as of the last completed collect.
    pub async fn target_count(&self) -> u64 {
        self.state.lock().await.target_count
    }

    /// Current registry contents, as of the last completed collect.
    pub async fn targets(&self) -> Vec<TargetSnapshot> {
        self.state.lock().await.registry.snapshot()
    }
}

#[async_trait]
impl Collector for Exporter {
    async fn describe(&self) -> Vec<Arc<MetricDesc>> {
        let state = self.state.lock().await;
        let mut out = vec![self.count_desc.clone()];
        out.extend(
            state
                .registry
                .snapshot()
                .iter()
                .map(|t| Arc::new(self.state_desc(&t.labels))),
        );
        out
    }

    async fn collect(&self) -> Vec<Sample> {
        let mut state = self.state.lock().await;

        if let Err(e) = self.poll(&mut state).await {
            error!(kind = e.kind().as_str(), error = %e, url = %self.client.targets_url(), "upstream poll failed");
            state.target_count = 0;
            return vec![Sample::new(self.count_desc.clone(), 0.0)];
        }

        let mut out: Vec<Sample> = state
            .registry
            .snapshot()
            .into_iter()
            .map(|t| Sample::new(Arc::new(self.state_desc(&t.labels)), t.state.value()))
            .collect();
        out.push(Sample::new(self.count_desc.clone(), state.target_count as f64));
        out
    }
}
