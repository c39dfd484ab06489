//! Error types for the work-time accounting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only the record-building path (turning a validated form submission into a
//! stored shift record) signals errors; the read-side computations degrade to
//! zeroed results on malformed input instead of failing.

use thiserror::Error;

/// The main error type for the work-time accounting engine.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     value: "2024-13-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date '2024-13-01': expected YYYY-MM-DD");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string did not match the `YYYY-MM-DD` calendar format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A time-of-day string did not match the `HH:MM` format.
    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime {
        /// The field that was invalid (e.g., "start_time").
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
