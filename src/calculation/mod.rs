//! Calculation logic for the work-time accounting engine.
//!
//! This module contains the pure computations performed on a shift entry:
//! temporal field parsing and overnight interval resolution, net worked
//! duration, pay-period classification of the gross interval, and the
//! shift-default suggestion heuristic.

mod classifier;
mod duration;
mod interval;
mod suggestion;

pub use classifier::{classify, classify_entry};
pub use duration::{gross_hours, net_hours};
pub use interval::{parse_date, parse_time, resolve_interval};
pub use suggestion::{SuggestedTimes, default_times, suggest_times, suggest_times_entry};
