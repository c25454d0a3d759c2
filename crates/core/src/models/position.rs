use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated portfolio position: one asset held on one calendar day.
///
/// `asset` holds the catalog asset's id (unlike price records, which
/// reference assets by name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Sequential identifier (1-based, generation order)
    pub id: u64,

    /// Id of the held asset
    pub asset: Uuid,

    /// Units held (always positive)
    pub quantity: u64,

    /// Day the position is valued at. Generated at day precision, but
    /// queries compare calendar days, so any time-of-day is tolerated.
    #[serde(rename = "asOf")]
    pub as_of: DateTime<Utc>,

    /// Valuation price as a positive integer
    pub price: u64,
}

impl PositionRecord {
    pub fn new(id: u64, asset: Uuid, quantity: u64, as_of: DateTime<Utc>, price: u64) -> Self {
        Self {
            id,
            asset,
            quantity,
            as_of,
            price,
        }
    }
}
