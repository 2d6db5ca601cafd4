mod agenda;
mod check;
mod cli;
mod machines;

use anyhow::{Context, Result};
use clap::Parser;

use maintboard_client::ApiClient;
use maintboard_core::config::{load_dotenv, Config};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = Config::for_profile(&cli.profile);
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    config.log_summary();

    let client = ApiClient::new(&config.api).context("failed to build API client")?;

    match cli.command {
        Command::Agenda(args) => agenda::run(&client, &config, &args).await,
        Command::Machines { command } => machines::run(&client, &command).await,
        Command::Check(args) => {
            let clean = check::run(&client, &args).await?;
            if !clean {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
