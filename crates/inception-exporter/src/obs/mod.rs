//! Prometheus exposition.
//!
//! Collectors produce `Sample`s on demand; the registry gathers them in a
//! fixed order and `metrics::render` turns them into the text format served
//! on the metrics path.

pub mod build_info;
pub mod metrics;
#[cfg(target_os = "linux")]
pub mod process;
pub mod registry;

pub use build_info::BuildInfoCollector;
pub use metrics::{render, MetricDesc, MetricKind, Sample, TEXT_CONTENT_TYPE};
#[cfg(target_os = "linux")]
pub use process::ProcessCollector;
pub use registry::{Collector, CollectorRegistry};
