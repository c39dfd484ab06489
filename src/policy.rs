//! The pay-period classification policy.
//!
//! This module defines the strongly-typed policy table that governs which pay
//! bucket a given minute of work falls into. The table is fixed — the tracker
//! applies a single agreement, not per-jurisdiction rules — but it is kept as
//! a value so the classifier stays a pure function of its inputs.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::PayBucket;

/// The day-band boundaries and weekend rules used to classify worked time.
///
/// All hours are hour-of-day values in `0..24`. The default value is the
/// engine's standard table: day work `06:00–18:00`, evening `18:00–22:00`,
/// night `22:00–06:00`, Saturday premium from `13:00`, Sunday all day.
///
/// # Example
///
/// ```
/// use worktime_engine::policy::PayPolicy;
/// use worktime_engine::models::PayBucket;
/// use chrono::Weekday;
///
/// let policy = PayPolicy::default();
/// assert_eq!(policy.bucket_for(Weekday::Tue, 9), PayBucket::Base);
/// assert_eq!(policy.bucket_for(Weekday::Sat, 14), PayBucket::SaturdayAfternoon);
/// assert_eq!(policy.bucket_for(Weekday::Sun, 2), PayBucket::SundayOrHoliday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Hour at which daytime (base) work begins.
    pub day_start_hour: u32,
    /// Hour at which evening work begins.
    pub evening_start_hour: u32,
    /// Hour at which night work begins.
    pub night_start_hour: u32,
    /// Hour from which Saturday work earns the Saturday premium.
    pub saturday_cutoff_hour: u32,
}

impl Default for PayPolicy {
    fn default() -> Self {
        PayPolicy {
            day_start_hour: 6,
            evening_start_hour: 18,
            night_start_hour: 22,
            saturday_cutoff_hour: 13,
        }
    }
}

impl PayPolicy {
    /// Determines the pay bucket for a minute of work.
    ///
    /// The priority order is fixed: Sunday wins outright, then the Saturday
    /// afternoon premium, then the hour-of-day band. The three hour bands are
    /// exhaustive over `0..24`, so every minute lands in exactly one bucket.
    pub fn bucket_for(&self, weekday: Weekday, hour: u32) -> PayBucket {
        if weekday == Weekday::Sun {
            return PayBucket::SundayOrHoliday;
        }
        if weekday == Weekday::Sat && hour >= self.saturday_cutoff_hour {
            return PayBucket::SaturdayAfternoon;
        }
        if hour >= self.night_start_hour || hour < self.day_start_hour {
            PayBucket::Night
        } else if hour >= self.evening_start_hour {
            PayBucket::Evening
        } else {
            PayBucket::Base
        }
    }

    /// Returns the hours-of-day at which the winning bucket can change,
    /// in ascending order. Midnight is implicit (the day of week changes).
    pub fn boundary_hours(&self) -> [u32; 4] {
        let mut hours = [
            self.day_start_hour,
            self.saturday_cutoff_hour,
            self.evening_start_hour,
            self.night_start_hour,
        ];
        hours.sort_unstable();
        hours
    }
}
