//! Core data models for the work-time accounting engine.
//!
//! This module contains all the domain types exchanged with the
//! persistence and UI collaborators.

mod classification;
mod project;
mod shift;
mod week_group;

pub use classification::{BucketHours, PayBucket};
pub use project::Project;
pub use shift::{ShiftDraft, ShiftRecord};
pub use week_group::{WeekGroup, week_start};
