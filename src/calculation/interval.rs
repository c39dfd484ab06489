//! Temporal field parsing and overnight interval resolution.
//!
//! Shift fields arrive as the raw strings the UI and store use: `YYYY-MM-DD`
//! dates and `HH:MM` times. This module parses them and resolves a shift's
//! start/end pair into concrete instants, applying the single-midnight
//! rollover rule shared by the duration and classification calculations.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Returns `None` for anything that does not match the format, including
/// out-of-range components; callers on the read side treat that as a
/// degraded-but-defined case rather than an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses an `HH:MM` wall-clock time.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Resolves a shift's wall-clock times into two instants anchored on `date`.
///
/// When `end` is numerically earlier than `start` the shift is taken to end
/// on the following calendar day, so the end instant is advanced by 24
/// hours. Only a single rollover is applied; a shift longer than 24 hours
/// is not representable. An equal start and end yields a zero-length
/// interval, not a full day.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::resolve_interval;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(); // Friday
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
///
/// let (start_at, end_at) = resolve_interval(date, start, end);
/// assert_eq!(end_at.date(), NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// assert_eq!((end_at - start_at).num_hours(), 8);
/// ```
pub fn resolve_interval(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let start_at = date.and_time(start);
    let mut end_at = date.and_time(end);
    if end_at < start_at {
        end_at += Duration::hours(24);
    }
    (start_at, end_at)
}
