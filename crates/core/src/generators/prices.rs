use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng};
use uuid::Uuid;

use crate::dates;
use crate::models::asset::{Asset, AssetType};
use crate::models::price::PriceRecord;

/// First observation day of every weekly price series.
pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid calendar date")
}

/// One record per asset per week, from `series_start()` (inclusive) up to
/// `now`. Prices follow an integer random walk around a per-category base
/// level and never drop below 1.
pub fn weekly_series(rng: &mut StdRng, assets: &[Asset], now: DateTime<Utc>) -> Vec<PriceRecord> {
    let mut records = Vec::new();

    for asset in assets {
        let mut price = initial_price(rng, asset.asset_type);
        let mut day = series_start();

        while dates::day_start(day) <= now {
            records.push(PriceRecord {
                id: Uuid::from_u128(rng.gen()),
                asset: asset.name.clone(),
                price,
                timestamp: dates::day_start(day),
            });
            price = step(rng, price);
            day += Duration::weeks(1);
        }
    }

    records
}

/// Starting level of the walk, by asset category.
fn initial_price(rng: &mut StdRng, asset_type: AssetType) -> u64 {
    match asset_type {
        AssetType::Crypto => rng.gen_range(2_000..=50_000),
        AssetType::Stock => rng.gen_range(40..=400),
        AssetType::Fiat => rng.gen_range(1..=2),
    }
}

/// Advance the walk by -5%..=+5%, floored at 1.
fn step(rng: &mut StdRng, price: u64) -> u64 {
    let percent: i64 = rng.gen_range(-5..=5);
    let delta = (price as i64).saturating_mul(percent) / 100;
    price.saturating_add_signed(delta).max(1)
}
