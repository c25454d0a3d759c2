use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated price observation for one asset.
///
/// `asset` holds the catalog asset's NAME, not its id; price queries
/// address assets by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Name of the priced asset
    pub asset: String,

    /// Price as a non-negative integer
    pub price: u64,

    /// Instant the observation is dated at
    pub timestamp: DateTime<Utc>,
}

impl PriceRecord {
    pub fn new(asset: impl Into<String>, price: u64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset: asset.into(),
            price,
            timestamp,
        }
    }
}

/// Output entry of a price query: a stored record, or a placeholder for a
/// requested asset that had no matching record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub id: Uuid,

    pub asset: String,

    pub price: u64,

    /// Absent on placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PriceQuote {
    /// Placeholder for an asset with no matching record: fresh id, zero price.
    pub fn placeholder(asset: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset: asset.into(),
            price: 0,
            timestamp: None,
        }
    }
}

impl From<&PriceRecord> for PriceQuote {
    fn from(record: &PriceRecord) -> Self {
        Self {
            id: record.id,
            asset: record.asset.clone(),
            price: record.price,
            timestamp: Some(record.timestamp),
        }
    }
}
