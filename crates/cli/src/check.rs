//! `check` — validate recurrence rules across the registry.

use anyhow::Result;

use maintboard_calendar::validation::validate_machine;
use maintboard_client::ApiClient;

use crate::cli::CheckArgs;
use crate::machines::fetch_machines;

/// Returns `true` when no errors were found (warnings are allowed).
pub async fn run(client: &ApiClient, args: &CheckArgs) -> Result<bool> {
    let machines = fetch_machines(client, args.machine.as_deref()).await?;

    let mut error_count = 0;
    let mut warning_count = 0;

    for machine in &machines {
        let report = validate_machine(machine);
        if report.is_clean() {
            continue;
        }

        println!("{} — {}", machine.id, machine.name);
        for dup in &report.duplicate_task_ids {
            error_count += 1;
            println!("  error: duplicate task id '{}'", dup);
        }
        for task in &report.tasks {
            for issue in &task.result.errors {
                error_count += 1;
                println!("  error [{}] {}: {}", task.task_id, issue.path, issue.message);
            }
            for issue in &task.result.warnings {
                warning_count += 1;
                println!(
                    "  warning [{}] {}: {}",
                    task.task_id, issue.path, issue.message
                );
            }
        }
    }

    println!(
        "\n{} errors, {} warnings across {} machines",
        error_count,
        warning_count,
        machines.len()
    );
    Ok(error_count == 0)
}
