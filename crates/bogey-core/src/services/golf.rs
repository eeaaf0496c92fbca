//! Thread-safe service wrapping the round, hole and stats repositories.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::config::StatsConfig;
use crate::db::{
    Database, HoleRepository, RoundRepository, SqliteHoleRepository, SqliteRoundRepository,
    SqliteUserStatsRepository, UserStatsRepository,
};
use crate::models::{Hole, OwnerId, Round};
use crate::stats::{CachedUserStats, UserStatsSummary};
use crate::{Error, Result};

/// Entry point for every round, hole and stats operation.
///
/// Each method takes the caller identity as `Option<&OwnerId>`. Mutations
/// fail with [`Error::Unauthenticated`] when it is `None`; reads return
/// nothing instead.
#[derive(Clone)]
pub struct GolfService {
    pub(super) db: Arc<Mutex<Database>>,
    pub(super) config: StatsConfig,
}

impl GolfService {
    /// Open a service backed by the database file at `db_path`.
    pub async fn open_path(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&db_path)?;
        Ok(Self::from_database(db))
    }

    /// Open an in-memory service (primarily for tests).
    pub async fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::from_database(db))
    }

    fn from_database(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            config: StatsConfig::default(),
        }
    }

    /// Replace the stats configuration.
    #[must_use]
    pub fn with_config(mut self, config: StatsConfig) -> Self {
        self.config = config.normalized();
        self
    }

    pub const fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// The caller identity, or `Unauthenticated`.
    pub(super) fn require(owner: Option<&OwnerId>) -> Result<&OwnerId> {
        owner.ok_or(Error::Unauthenticated)
    }

    /// Map access errors on reads to "nothing there".
    pub(super) fn tolerant<T>(result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_access_denied() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Fetch the holes of each round, one query per round.
    pub(super) fn holes_of(conn: &Connection, rounds: &[Round]) -> Result<Vec<Hole>> {
        let repo = SqliteHoleRepository::new(conn);
        let mut holes = Vec::new();
        for round in rounds {
            holes.extend(repo.list_for_round(&round.id)?);
        }
        Ok(holes)
    }

    /// Lifetime stats over every completed round of `owner`.
    pub(super) fn lifetime_stats(conn: &Connection, owner: &OwnerId) -> Result<UserStatsSummary> {
        let rounds = SqliteRoundRepository::new(conn).list_completed(owner, None)?;
        let holes = Self::holes_of(conn, &rounds)?;
        tracing::debug!(
            "Aggregating lifetime stats for {owner}: {} rounds, {} holes",
            rounds.len(),
            holes.len()
        );
        Ok(UserStatsSummary::from_rounds(&rounds, &holes))
    }

    /// Recompute and store the cached stats for `owner`.
    ///
    /// Runs after the mutating transaction committed. Failures are logged and
    /// swallowed; the cache is allowed to be stale.
    pub(super) fn refresh_stats_cache(conn: &Connection, owner: &OwnerId) {
        let refreshed = Self::lifetime_stats(conn, owner).and_then(|summary| {
            SqliteUserStatsRepository::new(conn)
                .store(&CachedUserStats::from_summary(owner.clone(), &summary))
        });

        if let Err(error) = refreshed {
            tracing::warn!("Failed to refresh stats cache for {owner}: {error}");
        }
    }

    /// Drop the cached stats for `owner`, logging failures.
    pub(super) fn clear_stats_cache(conn: &Connection, owner: &OwnerId) {
        if let Err(error) = SqliteUserStatsRepository::new(conn).clear(owner) {
            tracing::warn!("Failed to clear stats cache for {owner}: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test(flavor = "multi_thread")]
    async fn open_path_creates_parent_dirs() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("nested").join("bogey.db");

        let service = GolfService::open_path(&db_path).await.unwrap();
        let golfer = OwnerId::new("alice").unwrap();
        service.create_round(Some(&golfer), "Muni").await.unwrap();

        assert!(db_path.exists());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn with_config_normalizes_zero_values() {
        let service = GolfService::open_in_memory()
            .await
            .unwrap()
            .with_config(StatsConfig {
                problem_window: 0,
                recent_rounds_default: 3,
                rounds_list_default: 0,
            });

        assert_eq!(service.config().problem_window, 10);
        assert_eq!(service.config().recent_rounds_default, 3);
        assert_eq!(service.config().rounds_list_default, 10);
    }

    #[test]
    fn tolerant_hides_access_errors_only() {
        assert_eq!(
            GolfService::tolerant::<u32>(Err(Error::NotFound("round".into()))).unwrap(),
            None
        );
        assert_eq!(
            GolfService::tolerant::<u32>(Err(Error::Unauthorized("round".into()))).unwrap(),
            None
        );
        assert_eq!(GolfService::tolerant(Ok(7)).unwrap(), Some(7));
        assert!(GolfService::tolerant::<u32>(Err(Error::Validation("par".into()))).is_err());
    }
}
