//! History reporting: filtering, ISO-week grouping, and summary totals.
//!
//! This module assembles the views the history and stats screens render
//! from a collection of stored shift records. Classification buckets are
//! read from the records as stored; nothing is reclassified here.

mod filters;
mod history;
mod stats;

pub use filters::{HistoryFilter, available_months, available_weeks, available_years};
pub use history::{HistoryView, filter_and_group};
pub use stats::{ProjectTotal, WeeklyTotal, hours_by_project, hours_by_week};
