//! Formatting utilities for durations and timestamps.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use serde::Serializer;

/// Format elapsed time for a status line (e.g., "12 ms", "1.5 s", "2m 5s").
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_millis();
    if ms < 1_000 {
        format!("{ms} ms")
    } else if ms < 60_000 {
        format!("{:.1} s", ms as f64 / 1_000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = ((ms % 60_000) as f64 / 1_000.0).round();
        format!("{minutes}m {seconds}s")
    }
}

/// Format milliseconds with fixed decimals (e.g., "0.42 ms").
pub fn format_ms(duration: Duration, digits: usize) -> String {
    format!("{:.digits$} ms", duration.as_secs_f64() * 1_000.0)
}

/// Locale-style timestamp (e.g., "10/18/2026, 9:05:03 PM").
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Current local time, as printed by `date`.
pub fn now_str() -> String {
    format_timestamp(&Local::now())
}

/// Serialize a duration as fractional milliseconds.
pub fn serialize_duration_ms<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1_000.0)
}
