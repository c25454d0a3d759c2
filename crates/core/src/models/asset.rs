use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category of a catalog asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Cryptocurrencies (Bitcoin, Ethereum, ...)
    Crypto,
    /// Stocks / equities (Apple, Tesla, ...)
    Stock,
    /// Fiat currencies (US Dollar, Euro, ...)
    Fiat,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Crypto => write!(f, "crypto"),
            AssetType::Stock => write!(f, "stock"),
            AssetType::Fiat => write!(f, "fiat"),
        }
    }
}

/// An entry in the fixed asset catalog.
///
/// Created once at startup and never mutated or deleted. Price records
/// reference an asset by `name`; position records reference it by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable name (e.g., "Bitcoin", "Apple", "US Dollar")
    pub name: String,

    /// Asset category
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl Asset {
    pub fn new(name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            asset_type,
        }
    }

    /// Convenience constructors for the catalog categories
    pub fn crypto(name: impl Into<String>) -> Self {
        Self::new(name, AssetType::Crypto)
    }

    pub fn stock(name: impl Into<String>) -> Self {
        Self::new(name, AssetType::Stock)
    }

    pub fn fiat(name: impl Into<String>) -> Self {
        Self::new(name, AssetType::Fiat)
    }
}
