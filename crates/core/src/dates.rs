//! Date predicates shared by the query engines.
//!
//! Two deliberately different comparison modes coexist here: exact-day
//! (`as_of`) matching truncates to the calendar day, while range matching
//! compares full instants against inclusive bounds. Callers validate date
//! strings before these predicates run; malformed input never reaches
//! them.

use chrono::{DateTime, NaiveDate, NaiveTime, ParseError, Utc};

/// True iff `ts` falls on the calendar day `day` (UTC); time-of-day is
/// ignored.
#[must_use]
pub fn same_calendar_day(ts: DateTime<Utc>, day: NaiveDate) -> bool {
    ts.date_naive() == day
}

/// True iff `from <= ts <= to`, inclusive on both ends, at full instant
/// precision (not day-truncated).
#[must_use]
pub fn in_range(ts: DateTime<Utc>, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
    from <= ts && ts <= to
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_day(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

/// Lift a calendar day to its first instant (midnight UTC). Range bounds
/// parsed from day-precision strings sit at midnight, so a `to` day's
/// later hours fall outside the range.
#[must_use]
pub fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
