//! Layered CLI configuration: file, then `IDGUARD__*` environment, then flags.
//!
//! ```toml
//! log_level = "debug"
//!
//! [provider]
//! region = "ap-southeast-2"
//! user_pool_id = "ap-southeast-2_example"
//! client_id = "xxxxxxxxxxxxexample"
//!
//! [provider.jwks]
//! request_timeout = "5s"
//! ```
//!
//! Environment overrides use `__` between path segments, e.g.
//! `IDGUARD__PROVIDER__CLIENT_ID=abc`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use idguard_auth::ProviderConfig;
use serde::Deserialize;

use crate::cli::Cli;

const DEFAULT_CONFIG_FILE: &str = "idguard.toml";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Applies command-line flags on top of file and environment values.
    pub fn apply_flags(&mut self, cli: &Cli) {
        if let Some(region) = &cli.region {
            self.provider.region = region.clone();
        }
        if let Some(pool) = &cli.user_pool_id {
            self.provider.user_pool_id = pool.clone();
        }
        if let Some(client_id) = &cli.client_id {
            self.provider.client_id = client_id.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.provider.endpoint = Some(endpoint.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = Some(level.clone());
        }
    }

    /// Logs the effective provider settings at debug level.
    pub fn log_resolved(&self) {
        tracing::debug!(
            region = %self.provider.region,
            user_pool_id = %self.provider.user_pool_id,
            client_id = %self.provider.client_id,
            endpoint = self.provider.endpoint.as_deref().unwrap_or("default"),
            "Resolved configuration"
        );
    }
}

/// Loads configuration from `path` (or the default file if it exists) and
/// the environment.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();
    match path {
        Some(p) => {
            builder = builder.add_source(File::from(p.to_path_buf()));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                builder = builder.add_source(File::from(default_path));
            }
        }
    }
    builder = builder.add_source(
        Environment::with_prefix("IDGUARD")
            .try_parsing(true)
            .separator("__"),
    );

    let cfg = builder.build().context("config build error")?;
    cfg.try_deserialize()
        .context("config deserialize error")
}

/// Resolves the effective configuration for a CLI invocation.
pub fn resolve(cli: &Cli) -> Result<AppConfig> {
    let mut cfg = load_config(cli.config.as_deref())?;
    cfg.apply_flags(cli);
    Ok(cfg)
}
