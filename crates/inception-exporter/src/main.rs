//! prometheus-inception-exporter
//!
//! - Landing page: /
//! - Metrics: <web.telemetry_path> (default /metrics)
//! - Config: optional YAML file (--config) overridden by flags

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use inception_core::error::Result;
use inception_exporter::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(config::CliArgs::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "exporter stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: config::CliArgs) -> Result<()> {
    let cfg = config::resolve(&args)?;
    let listen = cfg.web.listen_addr()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        upstream = %cfg.upstream.address,
        namespace = %cfg.namespace,
        timeout_ms = cfg.upstream.timeout_ms,
        basic_auth = cfg.upstream.basic_auth.is_some(),
        "starting prometheus-inception-exporter"
    );

    let metrics_path = cfg.web.telemetry_path.clone();
    let state = app_state::AppState::new(cfg).await?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(%listen, %metrics_path, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
