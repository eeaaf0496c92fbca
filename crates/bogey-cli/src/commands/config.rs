use bogey_core::OwnerId;

use crate::cli::ConfigCommands;
use crate::config::{default_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_golfer: Option<&str>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { golfer } => run_config_init(&golfer),
        ConfigCommands::Show => run_config_show(global_golfer),
    }
}

pub fn run_config_init(golfer: &str) -> Result<(), CliError> {
    let golfer = OwnerId::new(golfer)?;
    let mut config = CliConfig::load().map_err(CliError::Config)?;
    config.golfer = Some(golfer.to_string());

    let path = config.save().map_err(CliError::Config)?;
    println!("Saved config to {}", path.display());
    Ok(())
}

pub fn run_config_show(global_golfer: Option<&str>) -> Result<(), CliError> {
    let path = default_config_path().map_err(CliError::Config)?;
    let config = CliConfig::load_from_path(&path).map_err(CliError::Config)?;

    println!("Config file: {}", path.display());
    match config.resolve_golfer(global_golfer) {
        Some(golfer) => println!("Golfer: {golfer}"),
        None => println!("Golfer: (not set)"),
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
