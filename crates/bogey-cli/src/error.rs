use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] bogey_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(
        "No golfer configured. Pass --golfer, set BOGEY_GOLFER, or run `bogey config init --golfer <id>`."
    )]
    MissingGolfer,
    #[error("Round ID cannot be empty")]
    EmptyRoundId,
    #[error("Round not found for id/prefix: {0}")]
    RoundNotFound(String),
    #[error("{0}")]
    AmbiguousRoundId(String),
    #[error("Hole {0} has not been recorded for this round")]
    HoleNotFound(u8),
    #[error("Refusing to delete every round without --yes")]
    PurgeNotConfirmed,
    #[error("Configuration error: {0}")]
    Config(String),
}
