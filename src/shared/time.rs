//! Timestamp parsing for gate events
//!
//! Gate terminals send a mix of formats. The offset of an RFC 3339 value is
//! kept as-is so weekday/holiday rules see the terminal's local calendar;
//! values without an offset are taken as UTC.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::errors::DomainError;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a gate timestamp.
///
/// Accepts RFC 3339 (`2023-10-21T08:00:00+05:00`), a naive date-time
/// (`2023-10-21T08:00:00`) and a bare date (`2023-10-21`, midnight UTC).
pub fn parse_gate_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight).fixed_offset());
        }
    }

    Err(DomainError::InvalidTimestamp(raw.to_string()))
}

/// Resolve an optional client timestamp, defaulting to the server's local time.
pub fn resolve_gate_timestamp(raw: Option<&str>) -> Result<DateTime<FixedOffset>, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => parse_gate_timestamp(value),
        None => Ok(Local::now().fixed_offset()),
    }
}
