use uuid::Uuid;

use crate::models::asset::Asset;
use crate::models::position::PositionRecord;
use crate::models::price::PriceRecord;

/// The in-memory data context the query engines read from.
///
/// Populated once at startup (by the generators, or hand-crafted in tests)
/// and read-only afterward: there is no mutation API, so concurrent
/// readers need no locking. Record order is insertion order and is the
/// order unreduced query results come back in.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// The fixed asset catalog
    pub assets: Vec<Asset>,

    /// Weekly price series, one record per asset per week
    pub historical_prices: Vec<PriceRecord>,

    /// Daily positions over the trailing one-month window
    pub positions: Vec<PositionRecord>,
}

impl RecordStore {
    pub fn new(
        assets: Vec<Asset>,
        historical_prices: Vec<PriceRecord>,
        positions: Vec<PositionRecord>,
    ) -> Self {
        Self {
            assets,
            historical_prices,
            positions,
        }
    }

    /// Look up a catalog asset by name (price records reference names).
    #[must_use]
    pub fn asset_by_name(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// Look up a catalog asset by id (position records reference ids).
    #[must_use]
    pub fn asset_by_id(&self, id: Uuid) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }
}
