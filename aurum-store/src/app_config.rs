use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::reference_price::FALLBACK_PRICE_PER_GRAM;

/// Origin of the storefront frontend, advertised on the index route
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON array of raw product records
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Reference price served until the first successful refresh
    pub fallback_price_per_gram: f64,
    pub simulated_base: f64,
    /// Width of the band the simulated price moves in, centred on the base
    pub simulated_spread: f64,
    pub refresh_interval_seconds: u64,
}

impl PricingConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds.max(1))
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_dir("config")
    }

    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| config::File::from(dir.join(name)).required(false);

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001_i64)?
            .set_default("server.frontend_url", DEFAULT_FRONTEND_URL)?
            .set_default("catalog.path", "data/products.json")?
            .set_default("pricing.fallback_price_per_gram", FALLBACK_PRICE_PER_GRAM)?
            .set_default("pricing.simulated_base", FALLBACK_PRICE_PER_GRAM)?
            .set_default("pricing.simulated_spread", 5.0)?
            .set_default("pricing.refresh_interval_seconds", 1800_i64)?
            .add_source(file("default"))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(file(run_mode.as_str()))
            // Not checked in
            .add_source(file("local"))
            // Eg.. `AURUM__SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("AURUM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
