use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use serde::Deserialize;
use inception_core::error::{InceptionError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub upstream: UpstreamSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
            namespace: default_namespace(),
            upstream: UpstreamSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(InceptionError::UnsupportedVersion);
        }
        if !is_valid_namespace(&self.namespace) {
            return Err(InceptionError::Config(format!(
                "namespace must match [a-zA-Z_][a-zA-Z0-9_]*, got {:?}",
                self.namespace
            )));
        }

        self.web.validate()?;
        self.upstream.validate()?;

        Ok(())
    }
}

fn is_valid_namespace(ns: &str) -> bool {
    let mut chars = ns.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            telemetry_path: default_telemetry_path(),
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.telemetry_path.starts_with('/') || self.telemetry_path == "/" {
            return Err(InceptionError::Config(
                "web.telemetry_path must start with '/' and must not be '/'".into(),
            ));
        }
        Ok(())
    }

    /// `host:port` with a bare `:port` bound on every IPv4 interface.
    pub fn listen_host_port(&self) -> String {
        if self.listen_address.starts_with(':') {
            format!("0.0.0.0{}", self.listen_address)
        } else {
            self.listen_address.clone()
        }
    }

    /// Resolve the listen address; hostnames go through the system resolver
    /// and the first result wins.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let host_port = self.listen_host_port();
        let bad = |reason: String| {
            InceptionError::Config(format!(
                "web.listen_address must be host:port or :port ({}): {reason}",
                self.listen_address
            ))
        };
        host_port
            .to_socket_addrs()
            .map_err(|e| bad(e.to_string()))?
            .next()
            .ok_or_else(|| bad("host resolved to no addresses".into()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Base URI of the upstream HTTP API, without the `/api/v1/...` suffix.
    #[serde(default = "default_upstream_address")]
    pub address: String,

    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            address: default_upstream_address(),
            basic_auth: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.address).map_err(|e| {
            InceptionError::Config(format!("upstream.address is not a valid URL: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(InceptionError::Config(
                "upstream.address must use http or https".into(),
            ));
        }
        if !(100..=300_000).contains(&self.timeout_ms) {
            return Err(InceptionError::Config(
                "upstream.timeout_ms must be between 100 and 300000".into(),
            ));
        }
        if let Some(auth) = &self.basic_auth {
            if auth.username.is_empty() {
                return Err(InceptionError::Config(
                    "upstream.basic_auth.username must not be empty".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasicAuth {
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Keep the password out of logs.
impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_namespace() -> String {
    "prometheus_inception".into()
}
fn default_listen_address() -> String {
    "0.0.0.0:9142".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}
fn default_upstream_address() -> String {
    "http://localhost:9090".into()
}
fn default_timeout_ms() -> u64 {
    5000
}
