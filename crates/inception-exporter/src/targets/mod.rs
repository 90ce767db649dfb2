//! Upstream target tracking: discovery client, target registry, exporter.

pub mod client;
pub mod exporter;
pub mod registry;

pub use client::DiscoveryClient;
pub use exporter::Exporter;
pub use registry::{TargetLabels, TargetRegistry, TargetSnapshot, TargetState};
