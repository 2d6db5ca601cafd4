//! `machines` — registry listing and inspection.

use anyhow::{Context, Result};
use tracing::debug;

use maintboard_client::{ApiClient, FilterOp, ListQuery};
use maintboard_core::machine::{Machine, MaintenanceTask, Recurrence};

use crate::cli::MachinesCommand;

pub async fn run(client: &ApiClient, command: &MachinesCommand) -> Result<()> {
    match command {
        MachinesCommand::List { location, limit } => list(client, location.as_deref(), *limit).await,
        MachinesCommand::Show { id } => show(client, id).await,
    }
}

/// Fetch one machine by id, or the whole registry sorted by name.
pub async fn fetch_machines(client: &ApiClient, machine_id: Option<&str>) -> Result<Vec<Machine>> {
    match machine_id {
        Some(id) => {
            let machine = client
                .machines()
                .get(id)
                .await
                .with_context(|| format!("failed to fetch machine '{}'", id))?;
            Ok(vec![machine])
        }
        None => {
            let machines = client
                .machines()
                .list(&ListQuery::new().sort_asc("name"))
                .await
                .context("failed to list machines")?;
            debug!(count = machines.len(), "fetched machine registry");
            Ok(machines)
        }
    }
}

async fn list(client: &ApiClient, location: Option<&str>, limit: u32) -> Result<()> {
    let mut query = ListQuery::new().sort_asc("name").limit(limit);
    if let Some(location) = location {
        query = query.filter("location", FilterOp::Eq, location);
    }

    let machines = client
        .machines()
        .list(&query)
        .await
        .context("failed to list machines")?;

    for machine in &machines {
        println!(
            "{:<12} {:<30} {:<16} {} tasks",
            machine.id,
            machine.name,
            machine.location.as_deref().unwrap_or("-"),
            machine.tasks.len()
        );
    }
    println!("\n{} machines", machines.len());
    Ok(())
}

async fn show(client: &ApiClient, id: &str) -> Result<()> {
    let machine = client
        .machines()
        .get(id)
        .await
        .with_context(|| format!("failed to fetch machine '{}'", id))?;

    println!("{} — {}", machine.id, machine.name);
    if let Some(location) = &machine.location {
        println!("location: {}", location);
    }
    if let Some(status) = &machine.status {
        println!("status:   {}", status);
    }

    if machine.tasks.is_empty() {
        println!("no maintenance tasks");
        return Ok(());
    }

    println!("tasks:");
    for task in &machine.tasks {
        let until = task
            .end_date
            .as_deref()
            .map(|end| format!(", until {}", end))
            .unwrap_or_default();
        println!(
            "  {:<12} {:<30} {} from {}{}",
            task.id,
            task.title,
            cadence(task),
            task.start_date,
            until
        );
    }
    Ok(())
}

/// Human-readable cadence, e.g. "weekly" or "every 3 months".
fn cadence(task: &MaintenanceTask) -> String {
    if task.interval <= 1 {
        return task.recurrence.to_string();
    }
    let unit = match task.recurrence {
        Recurrence::Daily => "days",
        Recurrence::Weekly => "weeks",
        Recurrence::Monthly => "months",
        Recurrence::Yearly => "years",
    };
    format!("every {} {}", task.interval, unit)
}
