//! Chart-ready summary series for the stats screen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Project, ShiftRecord, week_start};

/// Fallback label for records whose `project_id` resolves to no known project.
const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Summed net hours for one ISO week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// Sum of `hours_worked` across the week's records.
    pub hours: Decimal,
}

/// Summed net hours for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTotal {
    /// Resolved project name, or the shared "Unknown Project" label.
    pub name: String,
    /// Sum of `hours_worked` across the project's records.
    pub hours: Decimal,
}

/// Net hours summed per ISO week, ascending by week start.
///
/// Unlike the history view this series reads chronologically, the way a
/// bar chart is drawn. Records with an unparseable date are dropped with a
/// warning.
pub fn hours_by_week(records: &[ShiftRecord]) -> Vec<WeeklyTotal> {
    let mut totals: Vec<WeeklyTotal> = Vec::new();
    for record in records {
        let Some(date) = record.parsed_date() else {
            warn!(
                record_id = %record.id,
                date = %record.date,
                "skipping record with unparseable date"
            );
            continue;
        };
        let start = week_start(date);
        match totals.iter_mut().find(|t| t.week_start == start) {
            Some(total) => total.hours += record.hours_worked,
            None => totals.push(WeeklyTotal {
                week_start: start,
                hours: record.hours_worked,
            }),
        }
    }
    totals.sort_by_key(|t| t.week_start);
    totals
}

/// Net hours summed per project, in order of first appearance.
///
/// A `project_id` with no matching entry in `projects` falls into a shared
/// "Unknown Project" total; project existence is not this engine's concern.
pub fn hours_by_project(records: &[ShiftRecord], projects: &[Project]) -> Vec<ProjectTotal> {
    let mut totals: Vec<ProjectTotal> = Vec::new();
    for record in records {
        let name = projects
            .iter()
            .find(|p| p.id == record.project_id)
            .map_or(UNKNOWN_PROJECT, |p| p.name.as_str());
        match totals.iter_mut().find(|t| t.name == name) {
            Some(total) => total.hours += record.hours_worked,
            None => totals.push(ProjectTotal {
                name: name.to_string(),
                hours: record.hours_worked,
            }),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftDraft;
    use crate::policy::PayPolicy;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(id: &str, date: &str, project_id: &str) -> ShiftRecord {
        ShiftDraft {
            date: date.to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            project_id: project_id.to_string(),
            ..ShiftDraft::default()
        }
        .finalize(id, &PayPolicy::default())
        .unwrap()
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            code: String::new(),
        }
    }

    /// ST-001: weekly series is chronological and summed per ISO week
    #[test]
    fn test_st_001_hours_by_week() {
        let records = vec![
            record("c", "2024-01-08", "p1"),
            record("a", "2024-01-01", "p1"),
            record("b", "2024-01-07", "p1"),
        ];

        let totals = hours_by_week(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(
            totals[0].week_start,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(totals[0].hours, dec("16"));
        assert_eq!(totals[1].hours, dec("8"));
    }

    /// ST-002: project series resolves names and keeps first-appearance order
    #[test]
    fn test_st_002_hours_by_project() {
        let records = vec![
            record("a", "2024-01-01", "p1"),
            record("b", "2024-01-02", "p2"),
            record("c", "2024-01-03", "p1"),
        ];
        let projects = vec![project("p1", "Warehouse"), project("p2", "Office")];

        let totals = hours_by_project(&records, &projects);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].name, "Warehouse");
        assert_eq!(totals[0].hours, dec("16"));
        assert_eq!(totals[1].name, "Office");
        assert_eq!(totals[1].hours, dec("8"));
    }

    /// ST-003: unknown project ids pool into a shared fallback
    #[test]
    fn test_st_003_unknown_project_fallback() {
        let records = vec![
            record("a", "2024-01-01", "deleted_project"),
            record("b", "2024-01-02", "also_gone"),
        ];

        let totals = hours_by_project(&records, &[]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].name, UNKNOWN_PROJECT);
        assert_eq!(totals[0].hours, dec("16"));
    }

    #[test]
    fn test_hours_by_week_skips_unparseable_dates() {
        let mut corrupted = record("bad", "2024-01-01", "p1");
        corrupted.date = String::new();
        let records = vec![record("good", "2024-01-01", "p1"), corrupted];

        let totals = hours_by_week(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].hours, dec("8"));
    }
}
