pub mod dates;
pub mod errors;
pub mod generators;
pub mod models;
pub mod services;
pub mod store;

use chrono::{DateTime, Utc};

use errors::QueryError;
use generators::MarketDataGenerator;
use models::{
    asset::Asset, portfolio::PortfolioSnapshot, price::PriceQuote, query::PriceQuery,
};
use services::{portfolio_service::PortfolioService, price_service::PriceService};
use store::RecordStore;

/// Main entry point for the market-mock core library.
/// Owns the read-only record store and the query services over it.
#[must_use]
pub struct MarketMock {
    store: RecordStore,
    price_service: PriceService,
    portfolio_service: PortfolioService,
}

impl std::fmt::Debug for MarketMock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketMock")
            .field("assets", &self.store.assets.len())
            .field("historical_prices", &self.store.historical_prices.len())
            .field("positions", &self.store.positions.len())
            .finish()
    }
}

impl MarketMock {
    /// Build from an explicit record store (generated data in the server,
    /// hand-crafted fixtures in tests).
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            store,
            price_service: PriceService::new(),
            portfolio_service: PortfolioService::new(),
        }
    }

    /// Generate the startup data set from a seed, dated up to the current
    /// instant.
    pub fn generate(seed: u64) -> Self {
        Self::generate_at(seed, Utc::now())
    }

    /// Generate with an explicit "now", fully deterministic.
    pub fn generate_at(seed: u64, now: DateTime<Utc>) -> Self {
        Self::from_store(MarketDataGenerator::new(seed).generate(now))
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// The asset catalog, in store order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.store.assets
    }

    /// The underlying record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Filter the historical prices; exact-day queries reduce to the
    /// latest record per requested asset.
    pub fn query_prices(&self, query: &PriceQuery) -> Result<Vec<PriceQuote>, QueryError> {
        self.price_service.query(&self.store, query)
    }

    /// Build a portfolio snapshot, optionally narrowed to one calendar day.
    pub fn query_portfolio(&self, as_of: Option<&str>) -> Result<PortfolioSnapshot, QueryError> {
        self.portfolio_service.snapshot(&self.store, as_of)
    }
}
