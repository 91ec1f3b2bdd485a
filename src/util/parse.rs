//! Parsing of external date/time text into validated calendar values.

use chrono::{NaiveDate, NaiveTime};

/// Parses a calendar date from exactly the `YYYY-MM-DD` pattern.
///
/// Any other shape, or an invalid calendar date such as `2023-02-30`,
/// yields `None`. Empty input yields `None`, not a default; callers
/// distinguish missing from malformed by checking presence before parsing.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses a time of day, accepting `HH:MM:SS` first and `HH:MM` as a
/// fallback. 24-hour clock, no timezone.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}
