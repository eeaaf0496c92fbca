//! Per-user stats cache repository

use crate::error::Result;
use crate::models::OwnerId;
use crate::stats::CachedUserStats;
use rusqlite::{params, Connection, OptionalExtension};

use super::columns;

/// Trait for the materialized user stats view
pub trait UserStatsRepository {
    /// Load the cached stats for an owner
    fn load(&self, owner: &OwnerId) -> Result<Option<CachedUserStats>>;

    /// Replace the cached stats for an owner
    fn store(&self, stats: &CachedUserStats) -> Result<()>;

    /// Drop the cached stats for an owner
    fn clear(&self, owner: &OwnerId) -> Result<()>;
}

/// `SQLite` implementation of `UserStatsRepository`
pub struct SqliteUserStatsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteUserStatsRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl UserStatsRepository for SqliteUserStatsRepository<'_> {
    fn load(&self, owner: &OwnerId) -> Result<Option<CachedUserStats>> {
        let cached = self
            .conn
            .query_row(
                "SELECT owner_id, rounds_played, average_score, averages, last_updated
                 FROM user_stats WHERE owner_id = ?",
                params![owner.as_str()],
                |row| {
                    Ok(CachedUserStats {
                        owner_id: columns::owner(row, 0)?,
                        rounds_played: row.get(1)?,
                        average_score: row.get(2)?,
                        averages: columns::json(row, 3)?.unwrap_or_default(),
                        last_updated: row.get(4)?,
                    })
                },
            )
            .optional()?;

        Ok(cached)
    }

    fn store(&self, stats: &CachedUserStats) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO user_stats
                 (owner_id, rounds_played, average_score, averages, last_updated)
             VALUES (?, ?, ?, ?, ?)",
            params![
                stats.owner_id.as_str(),
                stats.rounds_played,
                stats.average_score,
                serde_json::to_string(&stats.averages)?,
                stats.last_updated
            ],
        )?;
        Ok(())
    }

    fn clear(&self, owner: &OwnerId) -> Result<()> {
        self.conn.execute(
            "DELETE FROM user_stats WHERE owner_id = ?",
            params![owner.as_str()],
        )?;
        Ok(())
    }
}
