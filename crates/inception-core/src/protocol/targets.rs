//! Upstream target-discovery envelope (`GET /api/v1/targets`).
//!
//! Only the fields the exporter reads are modelled; everything else the
//! upstream sends (`droppedTargets`, `labels`, `lastError`, ...) is ignored.

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Deserializer};

use crate::error::FetchError;

/// Path of the discovery endpoint, relative to the upstream base URI.
pub const TARGETS_PATH: &str = "/api/v1/targets";

/// Top-level API envelope.
///
/// `status`, `error_type` and `error` are decoded but not interpreted here.
#[derive(Debug, Deserialize)]
pub struct DiscoveryResponse {
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: TargetDiscovery,
    #[serde(default, rename = "errorType")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DiscoveryResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TargetDiscovery {
    #[serde(default, rename = "activeTargets", deserialize_with = "null_as_default")]
    pub active_targets: Vec<ActiveTarget>,
}

/// One scrape target as reported upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTarget {
    #[serde(default, rename = "discoveredLabels", deserialize_with = "null_as_default")]
    pub discovered_labels: HashMap<String, String>,
    #[serde(rename = "scrapeUrl")]
    pub scrape_url: String,
    pub health: TargetHealth,
}

impl ActiveTarget {
    /// The discovered `job` label, empty when absent.
    pub fn job(&self) -> &str {
        self.discovered_labels
            .get("job")
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Upstream-reported health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetHealth {
    Up,
    Down,
    Unknown,
    /// Any value the upstream may add later.
    #[serde(other)]
    Unrecognized,
}

/// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// Decode a discovery response body.
pub fn decode_discovery(body: Bytes) -> Result<DiscoveryResponse, FetchError> {
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
