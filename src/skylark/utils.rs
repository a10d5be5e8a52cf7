use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp, normalized to UTC.
///
/// Returns `None` for anything malformed; upstream payloads are not trusted
/// to carry well-formed timestamps.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
