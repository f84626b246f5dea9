//! Runtime configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. `config/catalog.{toml,json,yaml,...}` if present
//! 3. Environment variables prefixed `CATALOG__` (e.g. `CATALOG__SEARCH_DEBOUNCE_MS=150`)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

pub const DEFAULT_STORAGE_KEY: &str = "ecommerce-products";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const CONFIG_FILE: &str = "config/catalog";
const ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Error)]
pub enum CatalogConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Storage key holding the serialized product collection.
    pub storage_key: String,
    /// Directory for file-backed storage. Unset keeps products in memory only.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    /// Quiet period before a changed search term is applied.
    pub search_debounce_ms: u64,
    /// Mailbox size of the catalog actor.
    pub channel_capacity: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn validate(&self) -> Result<(), CatalogConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(CatalogConfigError::Invalid("storage_key must not be empty".into()));
        }
        if self.channel_capacity == 0 {
            return Err(CatalogConfigError::Invalid(
                "channel_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Loads configuration from defaults, the optional config file, and the environment.
pub fn load_config() -> Result<CatalogConfig, CatalogConfigError> {
    load_with_env(Environment::with_prefix(ENV_PREFIX).separator("__"))
}

fn load_with_env(env: Environment) -> Result<CatalogConfig, CatalogConfigError> {
    let settings = Config::builder()
        .set_default("storage_key", DEFAULT_STORAGE_KEY)?
        .set_default("search_debounce_ms", DEFAULT_SEARCH_DEBOUNCE_MS as i64)?
        .set_default("channel_capacity", DEFAULT_CHANNEL_CAPACITY as i64)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(env)
        .build()?;

    let config: CatalogConfig = settings.try_deserialize()?;
    config.validate().inspect_err(|e| {
        error!(error = %e, "Configuration validation failed");
    })?;

    debug!(?config, "Configuration loaded");
    Ok(config)
}
