//! ISO-week grouping of shift records.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// The shift records of one ISO week and their summed net hours.
///
/// A week group is ephemeral: it is computed per report render from the
/// filtered record set and never stored. The group is keyed by the Monday
/// its week starts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGroup {
    /// The Monday this ISO week starts on.
    pub week_start: NaiveDate,
    /// Member records, ordered by date descending.
    pub records: Vec<ShiftRecord>,
    /// Sum of `hours_worked` over the member records.
    pub total_hours: Decimal,
}

impl WeekGroup {
    /// The ISO week number of this group, for display.
    pub fn week_number(&self) -> u32 {
        self.week_start.iso_week().week()
    }

    /// The Sunday this ISO week ends on (inclusive).
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + chrono::Duration::days(6)
    }
}

/// Returns the Monday of the ISO week containing `date`.
///
/// # Example
///
/// ```
/// use worktime_engine::models::week_start;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// WG-001: Monday maps to itself
    #[test]
    fn test_wg_001_monday_is_its_own_week_start() {
        assert_eq!(week_start(make_date("2024-01-01")), make_date("2024-01-01"));
    }

    /// WG-002: Sunday maps back to the preceding Monday
    #[test]
    fn test_wg_002_sunday_maps_to_preceding_monday() {
        assert_eq!(week_start(make_date("2024-01-07")), make_date("2024-01-01"));
    }

    /// WG-003: the following Monday starts a new week
    #[test]
    fn test_wg_003_next_monday_starts_new_week() {
        assert_eq!(week_start(make_date("2024-01-08")), make_date("2024-01-08"));
    }

    #[test]
    fn test_week_start_across_year_boundary() {
        // 2026-01-01 is a Thursday; its ISO week starts Monday 2025-12-29.
        assert_eq!(week_start(make_date("2026-01-01")), make_date("2025-12-29"));
    }

    #[test]
    fn test_week_number_and_end() {
        let group = WeekGroup {
            week_start: make_date("2024-01-01"),
            records: vec![],
            total_hours: Decimal::ZERO,
        };
        assert_eq!(group.week_number(), 1);
        assert_eq!(group.week_end(), make_date("2024-01-07"));
    }
}
