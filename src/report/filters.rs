//! Hierarchical history filter and filter-option population.
//!
//! The history view filters by year, then zero-based month, then ISO week.
//! Cascading resets (picking a new year clears month and week) are the
//! calling UI's job; this layer accepts "all" at any level independently.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// The year/month/week selection applied to the history view.
///
/// `None` at any level means "all". `month` is a zero-based month index
/// (January = 0), matching what the UI collaborator sends; `week` is an
/// ISO week number. The numeric comparisons are locale-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// Calendar year, or all years.
    pub year: Option<i32>,
    /// Zero-based month index within the year, or all months.
    pub month: Option<u32>,
    /// ISO week number, or all weeks.
    pub week: Option<u32>,
}

impl HistoryFilter {
    /// The unfiltered selection.
    pub fn all() -> Self {
        HistoryFilter::default()
    }

    /// Whether a record dated `date` passes every non-"all" level.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.year.is_none_or(|y| y == date.year())
            && self.month.is_none_or(|m| m == date.month0())
            && self.week.is_none_or(|w| w == date.iso_week().week())
    }
}

/// Distinct years present in `records`, ascending.
///
/// Filter options are always projected from the unfiltered record set;
/// records with an unparseable date contribute nothing.
pub fn available_years(records: &[ShiftRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records
        .iter()
        .filter_map(|r| r.parsed_date())
        .map(|d| d.year())
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Distinct zero-based month indexes among records matching `year`,
/// ascending. `None` projects across all years.
pub fn available_months(records: &[ShiftRecord], year: Option<i32>) -> Vec<u32> {
    let mut months: Vec<u32> = records
        .iter()
        .filter_map(|r| r.parsed_date())
        .filter(|d| year.is_none_or(|y| y == d.year()))
        .map(|d| d.month0())
        .collect();
    months.sort_unstable();
    months.dedup();
    months
}

/// Distinct ISO week numbers among records matching the coarser `year` and
/// `month` selections, ascending.
pub fn available_weeks(
    records: &[ShiftRecord],
    year: Option<i32>,
    month: Option<u32>,
) -> Vec<u32> {
    let mut weeks: Vec<u32> = records
        .iter()
        .filter_map(|r| r.parsed_date())
        .filter(|d| year.is_none_or(|y| y == d.year()))
        .filter(|d| month.is_none_or(|m| m == d.month0()))
        .map(|d| d.iso_week().week())
        .collect();
    weeks.sort_unstable();
    weeks.dedup();
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftDraft;
    use crate::policy::PayPolicy;

    fn record(id: &str, date: &str) -> ShiftRecord {
        ShiftDraft {
            date: date.to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            project_id: "proj_001".to_string(),
            ..ShiftDraft::default()
        }
        .finalize(id, &PayPolicy::default())
        .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // HF-001: the all-filter matches everything
    // ==========================================================================
    #[test]
    fn test_hf_001_all_filter_matches() {
        let filter = HistoryFilter::all();
        assert!(filter.matches(make_date("2024-01-15")));
        assert!(filter.matches(make_date("1999-12-31")));
    }

    // ==========================================================================
    // HF-002: year and month filters combine
    // ==========================================================================
    #[test]
    fn test_hf_002_year_and_month_combine() {
        let filter = HistoryFilter {
            year: Some(2024),
            month: Some(0), // January
            week: None,
        };
        assert!(filter.matches(make_date("2024-01-15")));
        assert!(!filter.matches(make_date("2024-02-01")));
        assert!(!filter.matches(make_date("2023-01-15")));
    }

    // ==========================================================================
    // HF-003: week filter compares ISO week numbers
    // ==========================================================================
    #[test]
    fn test_hf_003_week_filter_is_iso() {
        let filter = HistoryFilter {
            year: Some(2024),
            month: None,
            week: Some(3),
        };
        assert!(filter.matches(make_date("2024-01-15"))); // Monday of ISO week 3
        assert!(filter.matches(make_date("2024-01-21"))); // Sunday of ISO week 3
        assert!(!filter.matches(make_date("2024-01-22")));
    }

    // ==========================================================================
    // HF-004: a finer filter is accepted without the coarser ones
    // ==========================================================================
    #[test]
    fn test_hf_004_week_without_year() {
        let filter = HistoryFilter {
            year: None,
            month: None,
            week: Some(3),
        };
        assert!(filter.matches(make_date("2024-01-15")));
        assert!(filter.matches(make_date("2023-01-17"))); // week 3 of another year
    }

    // ==========================================================================
    // HF-005: available options project through the coarser selection
    // ==========================================================================
    #[test]
    fn test_hf_005_available_options_cascade() {
        let mut corrupted = record("e", "2024-01-15");
        corrupted.date = "not-a-date".to_string();

        let records = vec![
            record("a", "2023-11-20"),
            record("b", "2024-01-15"),
            record("c", "2024-01-16"),
            record("d", "2024-03-02"),
            corrupted,
        ];

        assert_eq!(available_years(&records), vec![2023, 2024]);
        assert_eq!(available_months(&records, Some(2024)), vec![0, 2]);
        assert_eq!(available_months(&records, None), vec![0, 2, 10]);
        assert_eq!(available_weeks(&records, Some(2024), Some(0)), vec![3]);
    }

    #[test]
    fn test_available_options_empty_set() {
        assert!(available_years(&[]).is_empty());
        assert!(available_months(&[], None).is_empty());
        assert!(available_weeks(&[], None, None).is_empty());
    }
}
