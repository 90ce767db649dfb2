//! Exporter config loader (strict parsing) and CLI overrides.

pub mod cli;
pub mod schema;

use std::fs;

use inception_core::error::{InceptionError, Result};

pub use cli::CliArgs;
pub use schema::{BasicAuth, ExporterConfig, UpstreamSection, WebSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| InceptionError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| InceptionError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Build the effective config: file (if any) or defaults, then CLI flags on
/// top, then validation of the merged result.
pub fn resolve(args: &CliArgs) -> Result<ExporterConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_from_file(path)?,
        None => ExporterConfig::default(),
    };
    args.apply(&mut cfg);
    cfg.validate()?;
    Ok(cfg)
}
