//! Shift record model and the draft type that produces it.
//!
//! A [`ShiftRecord`] is the unit the persistence collaborator stores and
//! returns. Its temporal fields are kept in the raw string form the store
//! holds (`YYYY-MM-DD` dates, `HH:MM` times); the engine parses them on
//! demand and tolerates malformed values on the read side.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{classify, net_hours, parse_date, parse_time};
use crate::error::{EngineError, EngineResult};
use crate::models::BucketHours;
use crate::policy::PayPolicy;

/// A fully computed shift record, ready to be stored verbatim.
///
/// The two derived fields, `hours_worked` and `hour_classification`, are
/// never partially updated: an edit recomputes both from the full edited
/// input via [`ShiftDraft::finalize`] before handoff to the store.
///
/// Note that `hour_classification` partitions the *gross* interval (start
/// to end), while `hours_worked` is net of the break; the two totals differ
/// by `break_minutes / 60` for any shift with a non-zero break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Calendar day of the shift as stored, `YYYY-MM-DD`.
    pub date: String,
    /// Wall-clock start time as stored, `HH:MM`.
    pub start_time: String,
    /// Wall-clock end time as stored, `HH:MM`. When numerically earlier
    /// than `start_time` the shift ends on the following calendar day.
    pub end_time: String,
    /// Unpaid break length in minutes.
    pub break_minutes: u32,
    /// Net worked duration in hours, two decimal places.
    pub hours_worked: Decimal,
    /// Gross hours partitioned into pay buckets, two decimal places each.
    pub hour_classification: BucketHours,
    /// Reference to an externally owned project; not validated here.
    pub project_id: String,
    /// Optional hourly rate, carried through unchanged.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Free-form notes, opaque to the engine.
    #[serde(default)]
    pub notes: String,
    /// Colleagues on the shift, opaque to the engine.
    #[serde(default)]
    pub colleagues: String,
    /// What was worked on, opaque to the engine.
    #[serde(default)]
    pub task_description: String,
}

impl ShiftRecord {
    /// Parses the stored date, if well-formed.
    ///
    /// Records whose date does not parse are excluded from filtering,
    /// grouping, and totals by the report layer rather than treated as
    /// errors.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Raw shift-entry form values, before derivation.
///
/// This is the shape a UI collaborator hands over: strings for the temporal
/// fields, break minutes from a fixed menu of 15-minute increments. The
/// caller is responsible for having validated that required fields are
/// present; [`finalize`](ShiftDraft::finalize) only rejects values that do
/// not parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Unpaid break length in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Selected project id.
    pub project_id: String,
    /// Optional hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Colleagues on the shift.
    #[serde(default)]
    pub colleagues: String,
    /// What was worked on.
    #[serde(default)]
    pub task_description: String,
}

impl ShiftDraft {
    /// Computes both derived fields and produces a record ready to store.
    ///
    /// `id` is the store-assigned identifier: the existing one when editing,
    /// or whatever the store issued for a new record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] or [`EngineError::InvalidTime`]
    /// when a temporal field does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::ShiftDraft;
    /// use worktime_engine::policy::PayPolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = ShiftDraft {
    ///     date: "2026-01-13".to_string(), // a Tuesday
    ///     start_time: "08:00".to_string(),
    ///     end_time: "19:00".to_string(),
    ///     break_minutes: 30,
    ///     project_id: "proj_001".to_string(),
    ///     ..ShiftDraft::default()
    /// };
    ///
    /// let record = draft.finalize("rec_001", &PayPolicy::default()).unwrap();
    /// assert_eq!(record.hours_worked, Decimal::new(105, 1)); // 10.5
    /// assert_eq!(record.hour_classification.base, Decimal::new(10, 0));
    /// assert_eq!(record.hour_classification.evening, Decimal::new(1, 0));
    /// ```
    pub fn finalize(&self, id: &str, policy: &PayPolicy) -> EngineResult<ShiftRecord> {
        let date = parse_date(&self.date).ok_or_else(|| EngineError::InvalidDate {
            value: self.date.clone(),
        })?;
        let start = parse_time(&self.start_time).ok_or_else(|| EngineError::InvalidTime {
            field: "start_time".to_string(),
            value: self.start_time.clone(),
        })?;
        let end = parse_time(&self.end_time).ok_or_else(|| EngineError::InvalidTime {
            field: "end_time".to_string(),
            value: self.end_time.clone(),
        })?;

        Ok(ShiftRecord {
            id: id.to_string(),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            break_minutes: self.break_minutes,
            hours_worked: net_hours(start, end, self.break_minutes),
            hour_classification: classify(date, start, end, policy),
            project_id: self.project_id.clone(),
            hourly_rate: self.hourly_rate,
            notes: self.notes.clone(),
            colleagues: self.colleagues.clone(),
            task_description: self.task_description.clone(),
        })
    }
}
