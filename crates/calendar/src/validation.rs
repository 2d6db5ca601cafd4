//! Structured validation for maintenance tasks.
//!
//! Expansion fails fast on the first hard violation; this module produces the
//! full picture for editing surfaces and the `check` command: every error,
//! plus advisory warnings for fields the generator ignores or combinations
//! that make a series permanently empty.

use serde::{Deserialize, Serialize};

use maintboard_core::machine::{Machine, MaintenanceTask, Recurrence};

use crate::window::parse_wire_date;

// ── Result types ────────────────────────────────────────────────────

/// Validation outcome for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A single finding, addressed by wire field name (e.g. `"daysOfWeek"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validation outcome for a whole machine document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineValidation {
    pub machine_id: String,
    /// Task ids appearing more than once in the machine's task list.
    pub duplicate_task_ids: Vec<String>,
    pub tasks: Vec<TaskValidation>,
}

/// Per-task validation outcome inside a [`MachineValidation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskValidation {
    pub task_id: String,
    pub result: ValidationResult,
}

impl MachineValidation {
    /// No errors anywhere (warnings allowed).
    pub fn is_valid(&self) -> bool {
        self.duplicate_task_ids.is_empty() && self.tasks.iter().all(|t| t.result.valid)
    }

    /// Neither errors nor warnings — nothing worth printing.
    pub fn is_clean(&self) -> bool {
        self.is_valid() && self.tasks.iter().all(|t| t.result.warnings.is_empty())
    }
}

// ── Validation ──────────────────────────────────────────────────────

/// Validate a single task.
pub fn validate_task(task: &MaintenanceTask) -> ValidationResult {
    let mut result = ValidationResult::new();

    if task.id.is_empty() {
        result.error("id", "task id must not be empty");
    }
    if task.title.is_empty() {
        result.warning("title", "task has no title");
    }

    let start = parse_wire_date(&task.start_date);
    if start.is_none() {
        result.error(
            "startDate",
            format!("not a valid ISO-8601 date: '{}'", task.start_date),
        );
    }
    let mut end = None;
    if let Some(raw) = &task.end_date {
        end = parse_wire_date(raw);
        if end.is_none() {
            result.error("endDate", format!("not a valid ISO-8601 date: '{}'", raw));
        }
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            result.warning("endDate", "end date precedes start date; the series is empty");
        }
    }

    if task.interval < 1 {
        result.error("interval", "must be >= 1");
    }

    match &task.days_of_week {
        Some(days) if task.recurrence == Recurrence::Weekly => {
            if days.is_empty() {
                result.error("daysOfWeek", "must not be empty when present");
            }
            for day in days {
                if *day > 6 {
                    result.error(
                        "daysOfWeek",
                        format!("{} is not a weekday index (0=Sunday..6=Saturday)", day),
                    );
                }
            }
        }
        Some(_) => {
            result.warning(
                "daysOfWeek",
                format!("ignored for {} recurrence", task.recurrence),
            );
        }
        None => {}
    }

    if let Some(dom) = task.day_of_month {
        if !(1..=31).contains(&dom) {
            result.error("dayOfMonth", format!("{} outside 1..=31", dom));
        } else if matches!(task.recurrence, Recurrence::Daily | Recurrence::Weekly) {
            result.warning(
                "dayOfMonth",
                format!("ignored for {} recurrence", task.recurrence),
            );
        }
    }

    if let Some(month) = task.month {
        if !(1..=12).contains(&month) {
            result.error("month", format!("{} outside 1..=12", month));
        } else if task.recurrence != Recurrence::Yearly {
            result.warning("month", format!("ignored for {} recurrence", task.recurrence));
        }
    }

    result
}

/// Validate every task of a machine plus machine-level invariants
/// (duplicate task ids).
pub fn validate_machine(machine: &Machine) -> MachineValidation {
    let mut seen = std::collections::HashSet::new();
    let mut duplicate_task_ids = Vec::new();
    for task in &machine.tasks {
        if !seen.insert(task.id.as_str()) && !duplicate_task_ids.contains(&task.id) {
            duplicate_task_ids.push(task.id.clone());
        }
    }

    MachineValidation {
        machine_id: machine.id.clone(),
        duplicate_task_ids,
        tasks: machine
            .tasks
            .iter()
            .map(|task| TaskValidation {
                task_id: task.id.clone(),
                result: validate_task(task),
            })
            .collect(),
    }
}
