use rand::{rngs::StdRng, Rng};
use uuid::Uuid;

use crate::models::asset::{Asset, AssetType};

/// The fixed asset set served by the mock API. Names and categories are
/// stable across runs; ids are minted from the generation stream.
pub const CATALOG: &[(&str, AssetType)] = &[
    ("Bitcoin", AssetType::Crypto),
    ("Ethereum", AssetType::Crypto),
    ("Solana", AssetType::Crypto),
    ("Apple", AssetType::Stock),
    ("Tesla", AssetType::Stock),
    ("Nvidia", AssetType::Stock),
    ("US Dollar", AssetType::Fiat),
    ("Euro", AssetType::Fiat),
];

/// Materialize the catalog with ids drawn from the seeded stream.
pub fn assets(rng: &mut StdRng) -> Vec<Asset> {
    CATALOG
        .iter()
        .map(|(name, asset_type)| Asset {
            id: Uuid::from_u128(rng.gen()),
            name: (*name).to_string(),
            asset_type: *asset_type,
        })
        .collect()
}
