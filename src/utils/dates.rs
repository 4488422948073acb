//! Timestamp parsing for raw cache fields and query date bounds

use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO-8601-ish timestamp from the cache.
///
/// A trailing `Z` is read as `+00:00`. Timestamps without an offset are taken
/// as UTC, and a bare date means midnight UTC. Returns `None` when nothing fits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f%:z") {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(start_of_day())))
}

/// Which end of a date window a bound describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Parses a user-supplied window bound.
///
/// Accepts `YYYY-MM-DD` or a full timestamp. A bare end date covers the whole
/// UTC day. Anything else is a validation error.
pub fn parse_bound(raw: &str, bound: Bound) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        let time = match bound {
            Bound::Start => start_of_day(),
            Bound::End => end_of_day(),
        };
        return Ok(Utc.from_utc_datetime(&date.and_time(time)));
    }

    parse_timestamp(trimmed).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Invalid date: {} (expected YYYY-MM-DD or an ISO-8601 timestamp)",
            raw
        ))
    })
}

fn start_of_day() -> NaiveTime {
    NaiveTime::default()
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or_default()
}

/// Lower bound used when no start date is given
pub fn unbounded_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Upper bound used when no end date is given
pub fn unbounded_end() -> DateTime<Utc> {
    let last_day = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX);
    Utc.from_utc_datetime(&last_day.and_time(end_of_day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_trailing_z() {
        let parsed = parse_timestamp("2024-01-15T10:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_and_offset() {
        let parsed = parse_timestamp("2024-03-01T09:30:00.250+02:00").unwrap();
        assert_eq!(parsed.hour(), 7);
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_naive_is_utc() {
        let parsed = parse_timestamp("2024-06-30T23:15:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 30, 23, 15, 0).unwrap());

        let date_only = parse_timestamp("2024-06-30").unwrap();
        assert_eq!(date_only, Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45T00:00:00Z").is_none());
    }

    #[test]
    fn test_end_bound_covers_day() {
        let end = parse_bound("2024-01-31", Bound::End).unwrap();
        assert_eq!(end.day(), 31);
        assert_eq!(end.hour(), 23);
        assert_eq!(end.minute(), 59);

        let start = parse_bound("2024-01-01", Bound::Start).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_bound_is_validation_error() {
        let err = parse_bound("2024-02-30", Bound::Start).unwrap_err();
        assert!(err.is_validation());
        assert!(parse_bound("next week", Bound::End).is_err());
    }

    #[test]
    fn test_unbounded_window() {
        assert_eq!(unbounded_start().year(), 1900);
        assert_eq!(unbounded_end().year(), 2100);
        assert!(unbounded_start() < unbounded_end());
    }
}
