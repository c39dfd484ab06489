//! Net worked duration calculation.
//!
//! Converts a shift's start/end wall-clock times and break length into net
//! worked hours. The times are treated as falling on the same reference day,
//! with the shared overnight rollover applied when the end is numerically
//! earlier than the start.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Gross elapsed minutes between two wall-clock times on a reference day,
/// after the overnight rollover.
fn gross_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_minutes = i64::from(start.num_seconds_from_midnight()) / 60;
    let end_minutes = i64::from(end.num_seconds_from_midnight()) / 60;
    let mut elapsed = end_minutes - start_minutes;
    if elapsed < 0 {
        elapsed += 24 * 60;
    }
    elapsed
}

/// Gross elapsed hours between `start` and `end`, before break deduction.
///
/// Two decimal places, like every hour amount the engine hands out.
pub fn gross_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    (Decimal::new(gross_minutes(start, end), 0) / Decimal::new(60, 0)).round_dp(2)
}

/// Net worked hours: gross elapsed time minus the break, floored at zero.
///
/// There are no error conditions; the result is always a non-negative
/// number of hours with two decimal places.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::net_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
/// assert_eq!(net_hours(start, end, 30), Decimal::new(105, 1)); // 10.5
///
/// // Overnight: 22:00 to 06:00 is 8 hours, not -16.
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(net_hours(start, end, 0), Decimal::new(8, 0));
/// ```
pub fn net_hours(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Decimal {
    let net = (gross_minutes(start, end) - i64::from(break_minutes)).max(0);
    (Decimal::new(net, 0) / Decimal::new(60, 0)).round_dp(2)
}
