use async_trait::async_trait;
use aurum_catalog::round_to;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::app_config::PricingConfig;

/// Source of fresh reference prices
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_price(&self) -> Result<f64, FeedError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Price feed unavailable: {0}")]
    Unavailable(String),

    #[error("Price feed returned an unusable price: {0}")]
    InvalidPrice(f64),
}

/// Simulated gold price: uniform in `base ± spread / 2`, rounded to cents
#[derive(Debug)]
pub struct SimulatedGoldFeed {
    base: f64,
    spread: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedGoldFeed {
    pub fn new(base: f64, spread: f64) -> Self {
        Self::with_rng(base, spread, StdRng::from_entropy())
    }

    pub fn seeded(base: f64, spread: f64, seed: u64) -> Self {
        Self::with_rng(base, spread, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.simulated_base, config.simulated_spread)
    }

    fn with_rng(base: f64, spread: f64, rng: StdRng) -> Self {
        Self {
            base,
            spread,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl PriceFeed for SimulatedGoldFeed {
    async fn fetch_price(&self) -> Result<f64, FeedError> {
        let sample: f64 = self
            .rng
            .lock()
            .map_err(|_| FeedError::Unavailable("random source poisoned".to_string()))?
            .gen();

        let price = round_to(self.base + (sample - 0.5) * self.spread, 2);
        if !price.is_finite() || price <= 0.0 {
            return Err(FeedError::InvalidPrice(price));
        }
        Ok(price)
    }
}
