//! Error types for rule checking and occurrence expansion.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while validating rules or expanding occurrences.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    /// A task date field does not parse as an ISO-8601 date or date-time.
    #[error("task '{task_id}': {field} is not a valid ISO-8601 date: '{value}'")]
    InvalidDate {
        task_id: String,
        field: &'static str,
        value: String,
    },

    /// A rule field violates a hard invariant (interval, day set, ranges).
    #[error("task '{task_id}': {reason}")]
    InvalidRule { task_id: String, reason: String },

    /// Query window with start after end.
    #[error("invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// Month outside 1..=12 when building a month window.
    #[error("invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Result alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
