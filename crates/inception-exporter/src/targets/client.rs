//! HTTP client for the upstream discovery API.

use reqwest::Client;
use tracing::trace;

use inception_core::error::FetchError;
use inception_core::protocol::targets::{decode_discovery, DiscoveryResponse, TARGETS_PATH};

use crate::config::{BasicAuth, UpstreamSection};

/// One shared connection pool; a new request per poll.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    http: Client,
    targets_url: String,
    basic_auth: Option<BasicAuth>,
}

impl DiscoveryClient {
    /// The configured timeout bounds both connection setup and the whole
    /// round trip, body included.
    pub fn new(upstream: &UpstreamSection) -> Result<Self, FetchError> {
        let http = Client::builder()
            .connect_timeout(upstream.timeout())
            .timeout(upstream.timeout())
            .build()
            .map_err(|e| FetchError::RequestBuild(e.to_string()))?;

        Ok(Self {
            http,
            targets_url: format!("{}{}", upstream.address.trim_end_matches('/'), TARGETS_PATH),
            basic_auth: upstream.basic_auth.clone(),
        })
    }

    pub fn targets_url(&self) -> &str {
        &self.targets_url
    }

    /// GET the target list and decode it. The HTTP status is not checked:
    /// the upstream reports API errors inside the JSON envelope.
    pub async fn fetch(&self) -> Result<DiscoveryResponse, FetchError> {
        let mut req = self.http.get(&self.targets_url);
        if let Some(auth) = &self.basic_auth {
            req = req.basic_auth(&auth.username, Some(&auth.password));
        }
        let req = req
            .build()
            .map_err(|e| FetchError::RequestBuild(e.to_string()))?;

        let resp = self
            .http
            .execute(req)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(e.to_string())
            } else {
                FetchError::Decode(format!("read body: {e}"))
            }
        })?;
        trace!(%status, bytes = body.len(), body = %String::from_utf8_lossy(&body), "upstream response");

        decode_discovery(body)
    }
}
