// Date utility functions shared by the grid engine and the API mapping layer.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};

/// Parse a backend timestamp (ISO 8601 / RFC 3339 with timezone).
///
/// Returns `None` for missing or malformed input; malformed timestamps are a
/// data-quality condition, not an error (the booking is still rendered, it
/// just cannot contribute to range math).
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt),
        Err(err) => {
            log::debug!("Skipping malformed timestamp {:?}: {}", raw, err);
            None
        }
    }
}

/// Check whether a timestamp falls on the given calendar date, in the
/// timestamp's own offset.
pub fn is_on_day(timestamp: DateTime<FixedOffset>, day: NaiveDate) -> bool {
    timestamp.date_naive() == day
}

/// Hour of day for an end timestamp, rounded up to the next full hour when
/// the time is not exactly on the hour. An 18:30 end occupies the 18-19 row,
/// so the grid must extend to hour 19.
pub fn end_hour_rounded_up(end: DateTime<FixedOffset>) -> u32 {
    let hour = end.hour();
    if end.minute() > 0 || end.second() > 0 {
        hour + 1
    } else {
        hour
    }
}

/// Format a start/end pair as a 12-hour range, e.g. `"7:00 AM - 8:30 AM"`.
pub fn format_time_range(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> String {
    format!(
        "{} - {}",
        start.format("%-I:%M %p"),
        end.format("%-I:%M %p")
    )
}
