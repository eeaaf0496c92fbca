//! Stats queries over completed rounds.

use super::GolfService;
use crate::db::{
    RoundRepository, SqliteRoundRepository, SqliteUserStatsRepository, UserStatsRepository,
};
use crate::models::OwnerId;
use crate::stats::{CachedUserStats, ProblemSummary, RecentRounds, UserStatsSummary};
use crate::Result;

impl GolfService {
    /// Lifetime stats over every completed round. `None` for anonymous callers.
    pub async fn user_stats(&self, owner: Option<&OwnerId>) -> Result<Option<UserStatsSummary>> {
        let Some(owner) = owner else {
            return Ok(None);
        };
        let db = self.db.lock().await;
        Self::lifetime_stats(db.connection(), owner).map(Some)
    }

    /// The most frequent problem over the recent completed rounds window.
    pub async fn biggest_problem(&self, owner: Option<&OwnerId>) -> Result<Option<ProblemSummary>> {
        let Some(owner) = owner else {
            return Ok(None);
        };
        let db = self.db.lock().await;
        let rounds = SqliteRoundRepository::new(db.connection())
            .list_completed(owner, Some(self.config.problem_window))?;
        let holes = Self::holes_of(db.connection(), &rounds)?;
        tracing::debug!(
            "Looking for biggest problem of {owner} over {} rounds, {} holes",
            rounds.len(),
            holes.len()
        );

        Ok(ProblemSummary::from_rounds(&rounds, &holes))
    }

    /// The `count` most recent completed rounds and their average score.
    ///
    /// A missing or zero `count` falls back to the configured default.
    pub async fn recent_rounds(
        &self,
        owner: Option<&OwnerId>,
        count: Option<usize>,
    ) -> Result<RecentRounds> {
        let Some(owner) = owner else {
            return Ok(RecentRounds::default());
        };
        let count = count
            .filter(|&count| count > 0)
            .unwrap_or(self.config.recent_rounds_default);
        let db = self.db.lock().await;
        let rounds = SqliteRoundRepository::new(db.connection()).list_completed(owner, Some(count))?;
        Ok(RecentRounds::from_rounds(rounds))
    }

    /// The stats cache as last refreshed. May lag behind [`Self::user_stats`].
    pub async fn cached_user_stats(
        &self,
        owner: Option<&OwnerId>,
    ) -> Result<Option<CachedUserStats>> {
        let Some(owner) = owner else {
            return Ok(None);
        };
        let db = self.db.lock().await;
        SqliteUserStatsRepository::new(db.connection()).load(owner)
    }
}
