//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// Maintenance calendar tool for the facility dashboard API.
#[derive(Parser, Debug)]
#[command(name = "maintboard", version, about)]
pub struct Cli {
    /// Config profile (e.g. PROD); `{PROFILE}_`-prefixed env vars win.
    #[arg(long, env = "MAINTBOARD_PROFILE", default_value = "")]
    pub profile: String,

    /// Dashboard API base URL (overrides env config).
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print upcoming maintenance occurrences for a date window.
    Agenda(AgendaArgs),
    /// Inspect the machine registry.
    Machines {
        #[command(subcommand)]
        command: MachinesCommand,
    },
    /// Validate recurrence rules across the registry.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct AgendaArgs {
    /// Window start (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub from: Option<String>,

    /// Window end (YYYY-MM-DD). Defaults to four weeks after the start.
    #[arg(long)]
    pub to: Option<String>,

    /// Whole calendar month (YYYY-MM) instead of --from/--to.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,

    /// Days of padding on both window ends (defaults to config).
    #[arg(long)]
    pub pad: Option<u32>,

    /// Restrict to a single machine id.
    #[arg(long)]
    pub machine: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MachinesCommand {
    /// List machines, optionally filtered by location.
    List {
        /// Filter by location label (exact match).
        #[arg(long)]
        location: Option<String>,

        /// Maximum rows.
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Show one machine with its maintenance tasks.
    Show { id: String },
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Restrict to a single machine id.
    #[arg(long)]
    pub machine: Option<String>,
}
