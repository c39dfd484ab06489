//! History view assembly: filter, sort, group by ISO week, and total.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{BucketHours, ShiftRecord, WeekGroup, week_start};
use crate::report::HistoryFilter;

/// Everything the history screen renders for one filter selection.
///
/// All contents are freshly constructed from the caller's record slice;
/// nothing aliases caller state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryView {
    /// The records passing the filter, ordered by date descending.
    pub records: Vec<ShiftRecord>,
    /// The same records grouped by ISO week, week start descending.
    pub week_groups: Vec<WeekGroup>,
    /// Sum of `hours_worked` over the filtered records.
    pub total_hours: Decimal,
    /// Bucket-wise sum of `hour_classification` over the filtered records.
    ///
    /// Summed independently of `total_hours`: per record the bucket total is
    /// gross while `hours_worked` is net, so the two overall figures differ
    /// by the accumulated break time.
    pub bucket_totals: BucketHours,
}

/// Filters, sorts, groups, and totals a record collection for display.
///
/// Records whose stored date does not parse are dropped from the view with
/// a warning; the history screen should always render rather than fail on a
/// bad historical record.
///
/// # Example
///
/// ```
/// use worktime_engine::models::ShiftDraft;
/// use worktime_engine::policy::PayPolicy;
/// use worktime_engine::report::{HistoryFilter, filter_and_group};
///
/// let policy = PayPolicy::default();
/// let records: Vec<_> = [("a", "2024-01-01"), ("b", "2024-01-07"), ("c", "2024-01-08")]
///     .into_iter()
///     .map(|(id, date)| {
///         ShiftDraft {
///             date: date.to_string(),
///             start_time: "09:00".to_string(),
///             end_time: "17:00".to_string(),
///             project_id: "p".to_string(),
///             ..ShiftDraft::default()
///         }
///         .finalize(id, &policy)
///         .unwrap()
///     })
///     .collect();
///
/// let view = filter_and_group(&records, &HistoryFilter::all());
/// assert_eq!(view.week_groups.len(), 2);
/// assert_eq!(view.records[0].id, "c"); // date descending
/// ```
pub fn filter_and_group(records: &[ShiftRecord], filter: &HistoryFilter) -> HistoryView {
    let mut dated: Vec<(NaiveDate, ShiftRecord)> = records
        .iter()
        .filter_map(|record| match record.parsed_date() {
            Some(date) => Some((date, record)),
            None => {
                warn!(
                    record_id = %record.id,
                    date = %record.date,
                    "skipping record with unparseable date"
                );
                None
            }
        })
        .filter(|(date, _)| filter.matches(*date))
        .map(|(date, record)| (date, record.clone()))
        .collect();

    // Stable sort keeps store order for same-day records.
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut total_hours = Decimal::ZERO;
    let mut bucket_totals = BucketHours::default();
    for (_, record) in &dated {
        total_hours += record.hours_worked;
        bucket_totals.add(&record.hour_classification);
    }

    // Dates are descending, so records of one ISO week are consecutive and
    // groups come out ordered by week start descending.
    let mut week_groups: Vec<WeekGroup> = Vec::new();
    for (date, record) in &dated {
        let start = week_start(*date);
        match week_groups.last_mut() {
            Some(group) if group.week_start == start => {
                group.total_hours += record.hours_worked;
                group.records.push(record.clone());
            }
            _ => week_groups.push(WeekGroup {
                week_start: start,
                total_hours: record.hours_worked,
                records: vec![record.clone()],
            }),
        }
    }

    HistoryView {
        records: dated.into_iter().map(|(_, record)| record).collect(),
        week_groups,
        total_hours,
        bucket_totals,
    }
}
