//! Pay-period classification of a shift's gross interval.
//!
//! Partitions the gross elapsed interval of a shift (start to end, before
//! break deduction) into the five pay buckets. The governing conditions —
//! hour bands, the Saturday cutoff, the Sunday override — interact across
//! midnight and day-of-week boundaries, so the interval is split at every
//! policy boundary instant it contains and each sub-interval is summed
//! closed-form into the bucket that wins at its start. That covers the
//! interval exactly, with no overlap or gap, in at most a handful of steps
//! for any shift of up to 24 hours.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::calculation::interval::{parse_date, parse_time, resolve_interval};
use crate::models::BucketHours;
use crate::policy::PayPolicy;

/// Classifies the gross interval of a shift into pay buckets.
///
/// All five buckets are present in the result, zero-filled when unused, and
/// each is rounded to two decimal places once, at the end. The bucket
/// values sum to the gross elapsed hours between start and end (after the
/// overnight rollover); break time is deliberately not deducted here.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::classify;
/// use worktime_engine::policy::PayPolicy;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // A weekday evening shift: 21:00-23:00 splits at the 22:00 night boundary.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(); // Tuesday
/// let start = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
///
/// let hours = classify(date, start, end, &PayPolicy::default());
/// assert_eq!(hours.evening, Decimal::new(1, 0));
/// assert_eq!(hours.night, Decimal::new(1, 0));
/// ```
pub fn classify(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    policy: &PayPolicy,
) -> BucketHours {
    let (start_at, end_at) = resolve_interval(date, start, end);

    let mut minutes = [0i64; 5];
    let mut cursor = start_at;
    while cursor < end_at {
        let boundary = next_policy_boundary(cursor, policy).min(end_at);
        let bucket = policy.bucket_for(cursor.weekday(), cursor.hour());
        minutes[bucket as usize] += (boundary - cursor).num_minutes();
        cursor = boundary;
    }

    BucketHours::from_minutes(minutes)
}

/// String-level entry point for classification.
///
/// An unparseable date or time yields an all-zero mapping rather than an
/// error, so calling code can always render a classification.
pub fn classify_entry(
    date: &str,
    start_time: &str,
    end_time: &str,
    policy: &PayPolicy,
) -> BucketHours {
    match (
        parse_date(date),
        parse_time(start_time),
        parse_time(end_time),
    ) {
        (Some(d), Some(s), Some(e)) => classify(d, s, e, policy),
        _ => BucketHours::default(),
    }
}

/// The earliest instant strictly after `at` where the winning bucket can
/// change: the next in-day band boundary, or midnight (where the day of
/// week changes).
fn next_policy_boundary(at: NaiveDateTime, policy: &PayPolicy) -> NaiveDateTime {
    for hour in policy.boundary_hours() {
        let candidate = at
            .date()
            .and_hms_opt(hour, 0, 0)
            .expect("boundary hour within 0..24");
        if candidate > at {
            return candidate;
        }
    }
    (at.date() + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .expect("valid midnight time")
}
