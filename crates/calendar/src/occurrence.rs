//! Concrete calendar occurrences produced by expansion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One concrete calendar-dated instance of a recurring maintenance task.
///
/// Occurrences are derived fresh on every expansion and never persisted.
/// Machine fields are denormalized so a calendar renderer needs no further
/// lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOccurrence {
    /// Deterministic id, `"{task_id}-{yyyy-MM-dd}"` — at most one occurrence
    /// per task per calendar day.
    pub id: String,
    pub machine_id: String,
    pub machine_name: String,
    /// Back-reference to the originating task, not an ownership relation.
    pub task_id: String,
    pub title: String,
    pub date: NaiveDate,
}

/// Compose the deterministic occurrence id for a task and date.
pub fn occurrence_id(task_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", task_id, date.format("%Y-%m-%d"))
}
