//! Bogey CLI - log golf rounds hole by hole from the terminal
//!
//! Every round command acts for one golfer, picked from `--golfer`,
//! `BOGEY_GOLFER` or the config file.

mod cli;
mod commands;
mod config;
mod error;

#[cfg(test)]
mod tests;

use bogey_core::OwnerId;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::{open_service, resolve_db_path, Session};
use crate::commands::config::run_config;
use crate::commands::hole::run_hole;
use crate::commands::round::run_round;
use crate::commands::stats::run_stats;
use crate::config::CliConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bogey=info")),
        )
        .init();

    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { command } => return run_config(command, cli.golfer.as_deref()),
        command => command,
    };

    let config = CliConfig::load().map_err(CliError::Config)?;
    let golfer = config
        .resolve_golfer(cli.golfer.as_deref())
        .map(OwnerId::new)
        .transpose()?;
    let db_path = resolve_db_path(cli.db_path)?;
    let service = open_service(&db_path, config.stats).await?;
    let session = Session::new(service, golfer);

    match command {
        Commands::Round { command } => run_round(command, &session).await?,
        Commands::Hole { command } => run_hole(command, &session).await?,
        Commands::Stats { command } => run_stats(command, &session).await?,
        Commands::Config { command } => run_config(command, cli.golfer.as_deref())?,
    }

    Ok(())
}
