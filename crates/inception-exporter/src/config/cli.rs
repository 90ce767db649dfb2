use clap::Parser;

use super::schema::{BasicAuth, ExporterConfig};

/// Command-line flags. Every flag except `--config` overrides the matching
/// config file value when given.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "prometheus-inception-exporter",
    version,
    about = "Re-exports the scrape health of a Prometheus server's targets"
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "INCEPTION_CONFIG",
        value_hint = clap::ValueHint::FilePath,
        help = "Path to a YAML config file"
    )]
    pub config: Option<String>,

    #[arg(
        long = "web.listen-address",
        help = "Address to listen on for web interface and telemetry, e.g. 0.0.0.0:9142"
    )]
    pub listen_address: Option<String>,

    #[arg(long = "web.telemetry-path", help = "Path under which to expose metrics")]
    pub telemetry_path: Option<String>,

    #[arg(long, help = "Namespace for metrics")]
    pub namespace: Option<String>,

    #[arg(
        long = "prometheus.address",
        help = "HTTP API address of the Prometheus instance"
    )]
    pub prometheus_address: Option<String>,

    #[arg(
        long = "prometheus.basic_auth.username",
        help = "Username for the Prometheus instance"
    )]
    pub username: Option<String>,

    #[arg(
        long = "prometheus.basic_auth.password",
        env = "INCEPTION_BASIC_AUTH_PASSWORD",
        hide_env_values = true,
        help = "Password for the Prometheus instance"
    )]
    pub password: Option<String>,

    #[arg(long, help = "Timeout in seconds for fetching target states from Prometheus")]
    pub timeout: Option<u64>,
}

impl CliArgs {
    pub fn apply(&self, cfg: &mut ExporterConfig) {
        if let Some(v) = &self.listen_address {
            cfg.web.listen_address = v.clone();
        }
        if let Some(v) = &self.telemetry_path {
            cfg.web.telemetry_path = v.clone();
        }
        if let Some(v) = &self.namespace {
            cfg.namespace = v.clone();
        }
        if let Some(v) = &self.prometheus_address {
            cfg.upstream.address = v.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.upstream.timeout_ms = secs.saturating_mul(1000);
        }

        // An empty username means "no auth", matching the flag default.
        match (&self.username, &self.password) {
            (Some(u), _) if u.is_empty() => cfg.upstream.basic_auth = None,
            (Some(u), p) => {
                let password = p
                    .clone()
                    .or_else(|| cfg.upstream.basic_auth.as_ref().map(|a| a.password.clone()))
                    .unwrap_or_default();
                cfg.upstream.basic_auth = Some(BasicAuth {
                    username: u.clone(),
                    password,
                });
            }
            (None, Some(p)) => {
                if let Some(auth) = cfg.upstream.basic_auth.as_mut() {
                    auth.password = p.clone();
                }
            }
            (None, None) => {}
        }
    }
}
