//! Shift default suggestion heuristic.
//!
//! Proposes a plausible start/end time pair to pre-fill the shift-entry
//! form, based on the day of week being entered and the hour at which the
//! user is entering it. Advisory only: the output never touches stored
//! state and the user can override it freely.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::interval::parse_date;

/// A suggested start/end pair for the shift-entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTimes {
    /// Suggested start time.
    pub start: NaiveTime,
    /// Suggested end time. May be numerically earlier than `start` for the
    /// overnight suggestion.
    pub end: NaiveTime,
}

fn times(start_hour: u32, end_hour: u32) -> SuggestedTimes {
    SuggestedTimes {
        start: NaiveTime::from_hms_opt(start_hour, 0, 0).expect("hour within 0..24"),
        end: NaiveTime::from_hms_opt(end_hour, 0, 0).expect("hour within 0..24"),
    }
}

/// The fallback suggestion: an ordinary 08:00–17:00 day.
pub fn default_times() -> SuggestedTimes {
    times(8, 17)
}

/// Suggests start/end times for a shift on `date`, entered at `now`.
///
/// Saturdays suggest the afternoon shift, Sundays the day shift. On a
/// weekday the current hour decides: entering during the evening suggests
/// the evening shift, entering late at night the overnight shift, anything
/// else the ordinary day.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::suggest_times;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let now = saturday.and_hms_opt(9, 30, 0).unwrap();
///
/// let suggested = suggest_times(saturday, now);
/// assert_eq!(suggested.start, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
/// assert_eq!(suggested.end, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
/// ```
pub fn suggest_times(date: NaiveDate, now: NaiveDateTime) -> SuggestedTimes {
    match date.weekday() {
        Weekday::Sat => times(13, 20),
        Weekday::Sun => times(10, 18),
        _ => {
            let hour = now.hour();
            if (18..22).contains(&hour) {
                times(18, 22)
            } else if hour >= 22 || hour < 6 {
                times(22, 6) // overnight
            } else {
                default_times()
            }
        }
    }
}

/// String-level entry point: an unparseable date yields the fixed
/// 08:00–17:00 fallback.
pub fn suggest_times_entry(date: &str, now: NaiveDateTime) -> SuggestedTimes {
    match parse_date(date) {
        Some(d) => suggest_times(d, now),
        None => default_times(),
    }
}
