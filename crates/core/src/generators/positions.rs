use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng};

use crate::dates;
use crate::models::asset::Asset;
use crate::models::position::PositionRecord;

/// Length of the trailing window positions are generated over.
pub const WINDOW_DAYS: i64 = 30;

/// One record per asset per calendar day over the trailing window ending
/// at `now`'s date, oldest day first. Ids are sequential from 1 in
/// generation order.
pub fn daily_window(rng: &mut StdRng, assets: &[Asset], now: DateTime<Utc>) -> Vec<PositionRecord> {
    let today = now.date_naive();
    let mut records = Vec::new();
    let mut next_id: u64 = 1;

    for asset in assets {
        for offset in (0..WINDOW_DAYS).rev() {
            let day = today - Duration::days(offset);
            records.push(PositionRecord::new(
                next_id,
                asset.id,
                rng.gen_range(1..=100),
                dates::day_start(day),
                rng.gen_range(1..=10_000),
            ));
            next_id += 1;
        }
    }

    records
}
