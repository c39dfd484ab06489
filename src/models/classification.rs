//! Pay bucket vocabulary and per-bucket hour totals.
//!
//! This module defines the closed set of pay buckets a minute of work can
//! fall into and the [`BucketHours`] mapping that always carries all five
//! buckets, zero-filled when unused.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the five mutually exclusive pay-rate categories.
///
/// Exactly one bucket wins for any given minute of a shift; the priority
/// order lives in [`PayPolicy`](crate::policy::PayPolicy).
///
/// # Example
///
/// ```
/// use worktime_engine::models::PayBucket;
///
/// assert_eq!(PayBucket::Evening.label(), "OB 1");
/// assert_eq!(format!("{}", PayBucket::Night), "Night");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBucket {
    /// Ordinary daytime work on weekdays (and Saturday before the cutoff).
    Base,
    /// Weekday evening work.
    Evening,
    /// Weekday night work, including the early-morning wrap.
    Night,
    /// Saturday work from the afternoon cutoff onwards.
    SaturdayAfternoon,
    /// Any work on a Sunday or holiday.
    SundayOrHoliday,
}

impl PayBucket {
    /// All buckets in display order.
    pub const ALL: [PayBucket; 5] = [
        PayBucket::Base,
        PayBucket::Evening,
        PayBucket::Night,
        PayBucket::SaturdayAfternoon,
        PayBucket::SundayOrHoliday,
    ];

    /// The tracker's display label for this bucket.
    ///
    /// These are the keys historical records were stored under, so they are
    /// part of the persisted vocabulary, not just presentation.
    pub fn label(&self) -> &'static str {
        match self {
            PayBucket::Base => "Sueldo base",
            PayBucket::Evening => "OB 1",
            PayBucket::Night => "OB 2",
            PayBucket::SaturdayAfternoon => "OB 3",
            PayBucket::SundayOrHoliday => "OB 4",
        }
    }
}

impl std::fmt::Display for PayBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayBucket::Base => write!(f, "Base"),
            PayBucket::Evening => write!(f, "Evening"),
            PayBucket::Night => write!(f, "Night"),
            PayBucket::SaturdayAfternoon => write!(f, "SaturdayAfternoon"),
            PayBucket::SundayOrHoliday => write!(f, "SundayOrHoliday"),
        }
    }
}

/// Hours partitioned across the five pay buckets.
///
/// Every bucket is always present; unused buckets hold zero. For a stored
/// shift record the five values sum to the *gross* elapsed hours of the
/// shift (before break deduction) — break time is not subtracted from the
/// classification.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{BucketHours, PayBucket};
/// use rust_decimal::Decimal;
///
/// let mut hours = BucketHours::default();
/// hours.base = Decimal::new(80, 1); // 8.0
/// hours.evening = Decimal::new(10, 1); // 1.0
/// assert_eq!(hours.total(), Decimal::new(90, 1));
/// assert_eq!(hours.get(PayBucket::Night), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketHours {
    /// Hours in [`PayBucket::Base`].
    pub base: Decimal,
    /// Hours in [`PayBucket::Evening`].
    pub evening: Decimal,
    /// Hours in [`PayBucket::Night`].
    pub night: Decimal,
    /// Hours in [`PayBucket::SaturdayAfternoon`].
    pub saturday_afternoon: Decimal,
    /// Hours in [`PayBucket::SundayOrHoliday`].
    pub sunday_or_holiday: Decimal,
}

impl BucketHours {
    /// Builds a mapping from whole minutes per bucket, converting to hours
    /// rounded to two decimal places. The rounding happens here, once,
    /// rather than per accumulation step.
    pub fn from_minutes(minutes: [i64; 5]) -> Self {
        let to_hours =
            |m: i64| (Decimal::new(m, 0) / Decimal::new(60, 0)).round_dp(2);
        BucketHours {
            base: to_hours(minutes[PayBucket::Base as usize]),
            evening: to_hours(minutes[PayBucket::Evening as usize]),
            night: to_hours(minutes[PayBucket::Night as usize]),
            saturday_afternoon: to_hours(minutes[PayBucket::SaturdayAfternoon as usize]),
            sunday_or_holiday: to_hours(minutes[PayBucket::SundayOrHoliday as usize]),
        }
    }

    /// Returns the hours recorded for a single bucket.
    pub fn get(&self, bucket: PayBucket) -> Decimal {
        match bucket {
            PayBucket::Base => self.base,
            PayBucket::Evening => self.evening,
            PayBucket::Night => self.night,
            PayBucket::SaturdayAfternoon => self.saturday_afternoon,
            PayBucket::SundayOrHoliday => self.sunday_or_holiday,
        }
    }

    /// Adds another mapping into this one, bucket by bucket.
    ///
    /// Used by the history report to sum classifications over a filtered
    /// record set.
    pub fn add(&mut self, other: &BucketHours) {
        self.base += other.base;
        self.evening += other.evening;
        self.night += other.night;
        self.saturday_afternoon += other.saturday_afternoon;
        self.sunday_or_holiday += other.sunday_or_holiday;
    }

    /// Sum of all five buckets.
    pub fn total(&self) -> Decimal {
        self.base + self.evening + self.night + self.saturday_afternoon + self.sunday_or_holiday
    }

    /// The five buckets and their hours, in display order.
    pub fn entries(&self) -> [(PayBucket, Decimal); 5] {
        PayBucket::ALL.map(|bucket| (bucket, self.get(bucket)))
    }
}
