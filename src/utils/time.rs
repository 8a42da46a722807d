//! Time and timestamp utilities

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Get current Unix timestamp in milliseconds
///
/// A clock set before the epoch reads as 0.
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Format a millisecond timestamp as `HH:MM:SS.mmm` (UTC)
pub fn format_time_of_day(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%H:%M:%S%.3f").to_string(),
        None => format!("{}ms", timestamp_ms),
    }
}

/// Format a millisecond timestamp as RFC 3339 (UTC)
pub fn format_rfc3339(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        None => format!("{}ms", timestamp_ms),
    }
}
