//! `agenda` — expand and print occurrences for a date window.

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};

use maintboard_calendar::{occurrences_for_machines, DateWindow, TaskOccurrence};
use maintboard_client::ApiClient;
use maintboard_core::config::Config;

use crate::cli::AgendaArgs;
use crate::machines::fetch_machines;

pub async fn run(client: &ApiClient, config: &Config, args: &AgendaArgs) -> Result<()> {
    let window = resolve_window(args)?;
    let pad = args.pad.unwrap_or(config.calendar.pad_days);
    let window = window.padded(pad);

    let machines = fetch_machines(client, args.machine.as_deref()).await?;
    let mut occurrences = occurrences_for_machines(&machines, window)
        .context("failed to expand recurrence rules")?;

    // One chronological stream across machines is the caller's job.
    occurrences.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.machine_name.cmp(&b.machine_name))
            .then_with(|| a.title.cmp(&b.title))
    });

    if occurrences.is_empty() {
        println!(
            "no maintenance due between {} and {}",
            window.start(),
            window.end()
        );
        return Ok(());
    }

    print_agenda(&occurrences);
    println!(
        "\n{} occurrences between {} and {}",
        occurrences.len(),
        window.start(),
        window.end()
    );
    Ok(())
}

fn resolve_window(args: &AgendaArgs) -> Result<DateWindow> {
    if let Some(month) = &args.month {
        return month_window(month);
    }

    let from = match &args.from {
        Some(raw) => parse_date(raw).with_context(|| format!("invalid --from date '{}'", raw))?,
        None => Local::now().date_naive(),
    };
    let to = match &args.to {
        Some(raw) => parse_date(raw).with_context(|| format!("invalid --to date '{}'", raw))?,
        // Four inclusive weeks by default.
        None => from + Duration::days(27),
    };

    DateWindow::new(from, to).context("invalid agenda window")
}

fn month_window(raw: &str) -> Result<DateWindow> {
    let (year, month) = raw
        .split_once('-')
        .with_context(|| format!("invalid --month '{}', expected YYYY-MM", raw))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in --month '{}'", raw))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in --month '{}'", raw))?;
    DateWindow::month(year, month).with_context(|| format!("invalid --month '{}'", raw))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(Into::into)
}

fn print_agenda(occurrences: &[TaskOccurrence]) {
    let mut current: Option<NaiveDate> = None;
    for occ in occurrences {
        if current != Some(occ.date) {
            println!("\n{}", occ.date.format("%Y-%m-%d %a"));
            current = Some(occ.date);
        }
        println!("  {:<30} {}", occ.machine_name, occ.title);
    }
}
