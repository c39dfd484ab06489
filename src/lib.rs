//! Work-time accounting engine for a personal shift tracker.
//!
//! This crate provides the computational core of a work-hour tracker: it turns
//! a raw shift entry (date, start/end wall-clock times, break length) into a
//! net worked duration and a partition of the gross interval into pay buckets,
//! and it filters, groups, and totals accumulated shift records for history
//! reports. Storage, authentication, and presentation are external concerns;
//! the engine only consumes and produces plain data.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod policy;
pub mod report;
