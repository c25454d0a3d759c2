//! Startup synthetic-data generation.
//!
//! All randomness in the crate lives here, behind a seed. Once a store is
//! generated, every query over it is pure and deterministic.

pub mod catalog;
pub mod positions;
pub mod prices;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};

use crate::store::RecordStore;

/// Seedable source of the startup data set.
///
/// The same seed and the same `now` produce an identical record store, so
/// correctness tests never depend on non-deterministic input data.
#[derive(Debug, Clone, Copy)]
pub struct MarketDataGenerator {
    seed: u64,
}

impl MarketDataGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generate the full record store: the asset catalog, weekly price
    /// series from the fixed start date up to `now`, and daily positions
    /// over the trailing window ending at `now`.
    pub fn generate(&self, now: DateTime<Utc>) -> RecordStore {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let assets = catalog::assets(&mut rng);
        let historical_prices = prices::weekly_series(&mut rng, &assets, now);
        let positions = positions::daily_window(&mut rng, &assets, now);
        RecordStore::new(assets, historical_prices, positions)
    }
}
