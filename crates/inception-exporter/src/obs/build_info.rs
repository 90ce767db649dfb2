//! `<namespace>_exporter_build_info`: constant 1, labelled with version,
//! revision and branch.
//!
//! Revision and branch are read at compile time from
//! `INCEPTION_BUILD_REVISION` / `INCEPTION_BUILD_BRANCH` and fall back to
//! `unknown` for untagged builds.

use std::sync::Arc;

use async_trait::async_trait;

use super::metrics::{MetricDesc, Sample};
use super::registry::Collector;

const BUILD_REVISION: &str = match option_env!("INCEPTION_BUILD_REVISION") {
    Some(v) => v,
    None => "unknown",
};

const BUILD_BRANCH: &str = match option_env!("INCEPTION_BUILD_BRANCH") {
    Some(v) => v,
    None => "unknown",
};

pub struct BuildInfoCollector {
    desc: Arc<MetricDesc>,
}

impl BuildInfoCollector {
    pub fn new(namespace: &str) -> Self {
        let desc = MetricDesc::gauge(
            namespace,
            "exporter_build_info",
            "A metric with a constant '1' value labeled by version, revision and branch from which the exporter was built.",
        )
        .with_label("version", env!("CARGO_PKG_VERSION"))
        .with_label("revision", BUILD_REVISION)
        .with_label("branch", BUILD_BRANCH);
        Self { desc: Arc::new(desc) }
    }
}

#[async_trait]
impl Collector for BuildInfoCollector {
    async fn describe(&self) -> Vec<Arc<MetricDesc>> {
        vec![self.desc.clone()]
    }

    async fn collect(&self) -> Vec<Sample> {
        vec![Sample::new(self.desc.clone(), 1.0)]
    }
}
