//! Formatting utilities for file sizes and dates.

use chrono::NaiveDate;

/// Size units, indexed by power of 1024.
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display (e.g., "1 KB", "1.19 MB").
///
/// Scales by 1024 and rounds to two decimals, dropping trailing zeros.
/// Anything at or above 1024 GB stays in GB.
pub fn humanize_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, SIZE_UNITS[unit])
}

/// Format a calendar date relative to `today`.
///
/// - same day: "Today"
/// - one day apart: "Yesterday"
/// - 2 to 6 days apart: "N days ago"
/// - otherwise: short date such as "Feb 10, 2025"
///
/// The distance is absolute, so future dates read as "days ago" too.
pub fn humanize_date(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days().abs() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=6 => format!("{} days ago", days),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
