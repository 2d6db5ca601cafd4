//! Fan-out over machines and tasks, projecting machine context onto each
//! occurrence.
//!
//! The generator itself knows nothing about machines; denormalization of
//! `machine_id`/`machine_name` happens here so the generator stays testable
//! against bare tasks.

use maintboard_core::machine::Machine;

use crate::error::Result;
use crate::expand::expand_dates;
use crate::occurrence::{occurrence_id, TaskOccurrence};
use crate::window::DateWindow;

/// Expand every task of one machine, stamping machine context onto each
/// occurrence. An empty task list yields an empty result.
///
/// Fails on the first invalid task: one malformed rule aborts the whole
/// batch rather than silently dropping part of the calendar.
pub fn occurrences_for_machine(machine: &Machine, window: DateWindow) -> Result<Vec<TaskOccurrence>> {
    let mut out = Vec::new();
    for task in &machine.tasks {
        let dates = expand_dates(task, window)?;
        out.extend(dates.into_iter().map(|date| TaskOccurrence {
            id: occurrence_id(&task.id, date),
            machine_id: machine.id.clone(),
            machine_name: machine.name.clone(),
            task_id: task.id.clone(),
            title: task.title.clone(),
            date,
        }));
    }
    Ok(out)
}

/// Expand every task of every machine.
///
/// Output keeps each task's own ascending order but is not sorted across
/// tasks or machines; callers wanting one chronological stream sort the
/// result themselves. Error policy matches [`occurrences_for_machine`]:
/// first error wins.
pub fn occurrences_for_machines(
    machines: &[Machine],
    window: DateWindow,
) -> Result<Vec<TaskOccurrence>> {
    let mut out = Vec::new();
    for machine in machines {
        out.extend(occurrences_for_machine(machine, window)?);
    }
    Ok(out)
}
