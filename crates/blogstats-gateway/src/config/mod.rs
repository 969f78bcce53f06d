//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use blogstats_core::error::{BlogStatsError, Result};

pub use schema::{AdminSection, IngestSection, ServerSection, ServiceConfig, StoreKind, StoreSection};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "BLOGSTATS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "blogstats.yaml";

/// Load from `path`. A missing file yields the defaults.
pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            Ok(ServiceConfig::default())
        }
        Err(e) => Err(BlogStatsError::Config(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| BlogStatsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
