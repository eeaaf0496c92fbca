//! Database layer for Bogey

mod columns;
mod connection;
mod hole_repository;
mod migrations;
mod round_repository;
mod stats_repository;

pub use connection::Database;
pub use hole_repository::{HoleRepository, SqliteHoleRepository};
pub use round_repository::{DeletedRound, RoundRepository, SqliteRoundRepository};
pub use stats_repository::{SqliteUserStatsRepository, UserStatsRepository};
