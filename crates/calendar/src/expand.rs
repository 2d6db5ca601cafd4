//! Recurrence expansion: walk a task's rule forward from its anchor date and
//! collect every date that falls inside a query window.

use chrono::{Datelike, Duration, Months, NaiveDate};
use tracing::warn;

use maintboard_core::machine::{MaintenanceTask, Recurrence};

use crate::error::{CalendarError, Result};
use crate::window::{last_day_of_month, parse_wire_date, DateWindow};

/// Hard bound on walk length. Unreachable for a valid rule over a window of
/// fewer days than this; a degenerate step stalls against it and the result
/// is truncated instead of looping.
pub const MAX_ITERATIONS: usize = 1000;

/// Expand a task's recurrence rule into concrete dates inside `window`.
///
/// Dates come back ascending. The walk starts at the task's anchor date and
/// applies the rule's step until it leaves the window, passes the rule's own
/// `end_date`, or hits [`MAX_ITERATIONS`].
///
/// Fails fast on a malformed rule: unparseable `start_date`/`end_date`,
/// `interval` of zero, an empty or out-of-range weekday set, or out-of-range
/// `day_of_month`/`month`. With those checked, every step strictly advances
/// the cursor, so the iteration cap is a backstop rather than the
/// termination argument.
pub fn expand_dates(task: &MaintenanceTask, window: DateWindow) -> Result<Vec<NaiveDate>> {
    check_rule(task)?;

    let start = parse_task_date(task, "startDate", &task.start_date)?;
    let end = match &task.end_date {
        Some(raw) => Some(parse_task_date(task, "endDate", raw)?),
        None => None,
    };

    // The rule's active lifetime does not intersect the window.
    if start > window.end() {
        return Ok(Vec::new());
    }
    if let Some(end) = end {
        if end < window.start() {
            return Ok(Vec::new());
        }
    }

    let day_set = weekly_day_set(task);

    let mut dates = Vec::new();
    let mut cursor = start;
    let mut iterations = 0;

    while cursor <= window.end() && end.map_or(true, |e| cursor <= e) {
        if iterations >= MAX_ITERATIONS {
            warn!(
                task_id = %task.id,
                cursor = %cursor,
                "recurrence walk hit the iteration cap; result truncated"
            );
            break;
        }
        iterations += 1;

        if window.contains(cursor) && matches_pattern(cursor, day_set) {
            dates.push(cursor);
        }

        cursor = advance(cursor, task, day_set);
    }

    Ok(dates)
}

// ── Rule checking ───────────────────────────────────────────────────

fn check_rule(task: &MaintenanceTask) -> Result<()> {
    if task.interval < 1 {
        return Err(invalid(task, "interval must be >= 1".to_string()));
    }
    if task.recurrence == Recurrence::Weekly {
        if let Some(days) = &task.days_of_week {
            if days.is_empty() {
                return Err(invalid(task, "daysOfWeek must not be empty".to_string()));
            }
            if let Some(bad) = days.iter().find(|d| **d > 6) {
                return Err(invalid(
                    task,
                    format!("daysOfWeek contains invalid weekday index {}", bad),
                ));
            }
        }
    }
    if let Some(dom) = task.day_of_month {
        if !(1..=31).contains(&dom) {
            return Err(invalid(task, format!("dayOfMonth {} outside 1..=31", dom)));
        }
    }
    if let Some(month) = task.month {
        if !(1..=12).contains(&month) {
            return Err(invalid(task, format!("month {} outside 1..=12", month)));
        }
    }
    Ok(())
}

fn invalid(task: &MaintenanceTask, reason: String) -> CalendarError {
    CalendarError::InvalidRule {
        task_id: task.id.clone(),
        reason,
    }
}

fn parse_task_date(task: &MaintenanceTask, field: &'static str, raw: &str) -> Result<NaiveDate> {
    parse_wire_date(raw).ok_or_else(|| CalendarError::InvalidDate {
        task_id: task.id.clone(),
        field,
        value: raw.to_string(),
    })
}

// ── Pattern predicate ───────────────────────────────────────────────

/// The weekday set, but only when it actually governs the rule: weekly
/// recurrence with a (validated non-empty) set present.
fn weekly_day_set(task: &MaintenanceTask) -> Option<&[u8]> {
    match (task.recurrence, task.days_of_week.as_deref()) {
        (Recurrence::Weekly, Some(days)) => Some(days),
        _ => None,
    }
}

/// Weekday index with 0 = Sunday .. 6 = Saturday (the wire convention).
fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

fn in_day_set(days: &[u8], date: NaiveDate) -> bool {
    days.iter().any(|d| u32::from(*d) == weekday_index(date))
}

/// Every cursor except a weekly one with a day set is pattern-aligned by
/// construction of the step, so only that case filters.
fn matches_pattern(cursor: NaiveDate, day_set: Option<&[u8]>) -> bool {
    match day_set {
        Some(days) => in_day_set(days, cursor),
        None => true,
    }
}

// ── Stepping ────────────────────────────────────────────────────────

/// One step of the recurrence walk. Strictly increases the cursor for every
/// rule that passes `check_rule`.
fn advance(cursor: NaiveDate, task: &MaintenanceTask, day_set: Option<&[u8]>) -> NaiveDate {
    let interval = i64::from(task.interval);
    match task.recurrence {
        Recurrence::Daily => cursor + Duration::days(interval),
        Recurrence::Weekly => match day_set {
            Some(days) => next_weekly_match(cursor, days, task.interval),
            // Whole weeks from the current cursor, not from the anchor.
            None => cursor + Duration::days(interval * 7),
        },
        Recurrence::Monthly => {
            let stepped = add_months(cursor, task.interval);
            anchor_day(stepped, task.day_of_month)
        }
        Recurrence::Yearly => {
            let stepped = add_months(cursor, task.interval * 12);
            match (task.month, task.day_of_month) {
                (Some(month), Some(dom)) => {
                    let day = dom.min(last_day_of_month(stepped.year(), month));
                    NaiveDate::from_ymd_opt(stepped.year(), month, day).unwrap_or(stepped)
                }
                _ => stepped,
            }
        }
    }
}

/// Next date matching the weekday set under "every Nth week, on these
/// weekdays" semantics: first a later matching weekday inside the cursor's
/// week (weeks run Sunday..Saturday); once the week is exhausted, jump
/// `interval` weeks ahead and take the first matching weekday of that week.
fn next_weekly_match(cursor: NaiveDate, days: &[u8], interval: u32) -> NaiveDate {
    let remaining_in_week = 6 - weekday_index(cursor);
    for offset in 1..=i64::from(remaining_in_week) {
        let candidate = cursor + Duration::days(offset);
        if in_day_set(days, candidate) {
            return candidate;
        }
    }

    let jumped = cursor + Duration::days(i64::from(interval) * 7);
    let week_start = jumped - Duration::days(i64::from(weekday_index(jumped)));
    for offset in 0..7 {
        let candidate = week_start + Duration::days(offset);
        if in_day_set(days, candidate) {
            return candidate;
        }
    }

    // Unreachable with a validated non-empty day set.
    jumped
}

/// Calendar-month addition with chrono's end-of-month clamping
/// (Jan 31 + 1 month = Feb 28/29).
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    // Fails only at the far end of chrono's representable range; stalling
    // there is handled by the iteration cap.
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Re-anchor the day-of-month component, clamping to the month's length.
fn anchor_day(date: NaiveDate, day_of_month: Option<u32>) -> NaiveDate {
    match day_of_month {
        Some(dom) => {
            let day = dom.min(last_day_of_month(date.year(), date.month()));
            date.with_day(day).unwrap_or(date)
        }
        None => date,
    }
}
