//! Timestamp parsing and localized rendering.
//!
//! The content API is not consistent about timestamps: database rows come out
//! as naive ISO date-times (`2025-03-01T10:00:00.123456`), sample items carry
//! offsets (`2025-03-01T10:00:00+00:00`) and some feeds still use RFC 2822.
//! Rendering only ever needs the calendar date, shown in the pt-BR short form.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Short date format used throughout the panel (pt-BR).
pub const SHORT_DATE_FORMAT: &str = "%d/%m/%Y";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a timestamp in any of the shapes the API emits.
///
/// Offsets are kept as sent: the date shown is the one the server wrote, not a
/// conversion to the browser's zone.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|parsed| parsed.naive_local())
}

/// Formats a timestamp as `dd/mm/yyyy`, or `None` when it cannot be parsed.
pub fn format_short_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|ts| ts.format(SHORT_DATE_FORMAT).to_string())
}
