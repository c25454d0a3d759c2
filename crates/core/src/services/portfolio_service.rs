use chrono::{SecondsFormat, Utc};

use crate::dates;
use crate::errors::QueryError;
use crate::models::portfolio::PortfolioSnapshot;
use crate::models::position::PositionRecord;
use crate::store::RecordStore;

/// Builds portfolio snapshots from the position records.
///
/// Pure business logic apart from the one clock read that stamps an
/// undated snapshot. The record store is passed in by the caller.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Build a snapshot, optionally narrowed to one calendar day.
    ///
    /// With `as_of`, only positions on that day are included (time-of-day
    /// ignored) and the snapshot echoes the requested day. Without it,
    /// the whole collection is returned and the snapshot is stamped with
    /// the current instant in RFC 3339.
    ///
    /// No deduplication: an unfiltered snapshot carries one position per
    /// asset per day.
    pub fn snapshot(
        &self,
        store: &RecordStore,
        as_of: Option<&str>,
    ) -> Result<PortfolioSnapshot, QueryError> {
        match as_of {
            Some(raw) => {
                let day = dates::parse_day(raw)
                    .map_err(|_| QueryError::InvalidDate(raw.to_string()))?;
                let positions: Vec<PositionRecord> = store
                    .positions
                    .iter()
                    .filter(|p| dates::same_calendar_day(p.as_of, day))
                    .cloned()
                    .collect();
                Ok(PortfolioSnapshot::new(raw, positions))
            }
            None => Ok(PortfolioSnapshot::new(
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                store.positions.clone(),
            )),
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
