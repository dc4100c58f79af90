//! Timestamp helpers

use chrono::{DateTime, Utc};

/// Current time for mutations
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Render an ISO-8601 timestamp as a medium date with a short time,
/// e.g. `Aug 25, 2025, 2:30 PM` (UTC).
///
/// Input that does not parse is returned unchanged.
pub fn format_timestamp(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => format_datetime(&parsed.with_timezone(&Utc)),
        Err(_) => iso.to_string(),
    }
}

/// Render a timestamp the same way as [`format_timestamp`]
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %-I:%M %p").to_string()
}
