//! Date utilities: timestamp parsing, calendar-day keys, display formats.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

/// Instant type used across the pipeline. The offset is kept as encoded in
/// the source string, so calendar-day components are those the API wrote.
pub type Timestamp = DateTime<FixedOffset>;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2024-05-10T09:00:00.000+00:00`, `...Z`), naive date-times
/// (read as UTC wall-clock) and bare dates (midnight). Returns `None` for
/// anything else.
pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    // RFC 3339 without seconds, e.g. `2024-05-10T09:00+02:00`.
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt);
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    parse_date(s)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Fold the calendar-day components into `year*10000 + month*100 + day`.
pub fn day_key<D: Datelike>(d: &D) -> i64 {
    i64::from(d.year()) * 10000 + i64::from(d.month()) * 100 + i64::from(d.day())
}

/// `DD.MM.YYYY HH:mm`, the grid display form.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

/// `HH:mm` of a timestamp.
pub fn format_clock(ts: &Timestamp) -> String {
    ts.format("%H:%M").to_string()
}

