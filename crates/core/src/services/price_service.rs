use std::collections::HashSet;

use crate::dates;
use crate::errors::QueryError;
use crate::models::price::{PriceQuote, PriceRecord};
use crate::models::query::PriceQuery;
use crate::store::RecordStore;

/// Filters price records by asset membership and temporal criteria, and
/// reduces exact-day queries to one latest record per requested asset.
///
/// Pure business logic — no I/O, no clock reads, no mutation. The record
/// store is passed in by the caller, so tests run against hand-crafted
/// fixtures.
pub struct PriceService;

impl PriceService {
    pub fn new() -> Self {
        Self
    }

    /// Run a price query against the store.
    ///
    /// Branch order follows the request contract:
    /// 1. An absent/empty asset list fails with `MissingParameter`.
    /// 2. Records are narrowed to the requested asset names.
    /// 3. A complete `from`/`to` pair filters by inclusive instant range
    ///    and wins over `as_of`. A lone bound is ignored entirely.
    /// 4. `as_of` alone filters by calendar day, then reduces to the
    ///    latest record per requested asset (placeholders for misses).
    /// 5. No date filter returns the narrowed records in store order.
    pub fn query(
        &self,
        store: &RecordStore,
        query: &PriceQuery,
    ) -> Result<Vec<PriceQuote>, QueryError> {
        if query.assets.is_empty() {
            return Err(QueryError::MissingParameter("assets"));
        }

        let requested: HashSet<&str> = query.assets.iter().map(String::as_str).collect();
        let matching: Vec<&PriceRecord> = store
            .historical_prices
            .iter()
            .filter(|r| requested.contains(r.asset.as_str()))
            .collect();

        if let (Some(from), Some(to)) = (query.from.as_deref(), query.to.as_deref()) {
            let from = dates::parse_day(from)
                .map_err(|_| QueryError::InvalidDate(from.to_string()))?;
            let to = dates::parse_day(to)
                .map_err(|_| QueryError::InvalidDate(to.to_string()))?;
            // Day-precision bounds are lifted to midnight and compared at
            // full instant precision, unlike the day-truncated as_of match.
            let (from, to) = (dates::day_start(from), dates::day_start(to));
            return Ok(matching
                .into_iter()
                .filter(|r| dates::in_range(r.timestamp, from, to))
                .map(PriceQuote::from)
                .collect());
        }

        if let Some(raw) = query.as_of.as_deref() {
            let day = dates::parse_day(raw)
                .map_err(|_| QueryError::InvalidDate(raw.to_string()))?;
            let same_day: Vec<&PriceRecord> = matching
                .into_iter()
                .filter(|r| dates::same_calendar_day(r.timestamp, day))
                .collect();
            return Ok(Self::latest_per_asset(&query.assets, &same_day));
        }

        Ok(matching.into_iter().map(PriceQuote::from).collect())
    }

    /// One quote per requested asset, in request order.
    ///
    /// Picks the record with the maximum timestamp via a descending sort
    /// (ties broken by the sort's stable order, no business meaning).
    /// An asset with no record yields a zero-price placeholder instead of
    /// being omitted.
    fn latest_per_asset(assets: &[String], records: &[&PriceRecord]) -> Vec<PriceQuote> {
        assets
            .iter()
            .map(|name| {
                let mut candidates: Vec<&PriceRecord> = records
                    .iter()
                    .copied()
                    .filter(|r| r.asset == *name)
                    .collect();
                candidates.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                match candidates.first() {
                    Some(latest) => PriceQuote::from(*latest),
                    None => PriceQuote::placeholder(name),
                }
            })
            .collect()
    }
}

impl Default for PriceService {
    fn default() -> Self {
        Self::new()
    }
}
