//! Round lifecycle operations.

use super::GolfService;
use crate::db::{
    DeletedRound, HoleRepository, RoundRepository, SqliteHoleRepository, SqliteRoundRepository,
};
use crate::models::{OwnerId, Round, RoundId, RoundTotals, RoundWithHoles};
use crate::stats::RoundSummary;
use crate::Result;

impl GolfService {
    /// Start a new open round dated now.
    pub async fn create_round(&self, owner: Option<&OwnerId>, course_name: &str) -> Result<Round> {
        let owner = Self::require(owner)?;
        let db = self.db.lock().await;
        let round = SqliteRoundRepository::new(db.connection()).create(owner, course_name)?;
        tracing::info!("Started round {} at {}", round.id, round.course_name);
        Ok(round)
    }

    /// A round with its holes, or `None` when the caller can't see it.
    pub async fn get_round(
        &self,
        owner: Option<&OwnerId>,
        id: &RoundId,
    ) -> Result<Option<RoundWithHoles>> {
        let Some(owner) = owner else {
            return Ok(None);
        };
        let db = self.db.lock().await;
        let Some(round) =
            Self::tolerant(SqliteRoundRepository::new(db.connection()).get_owned(owner, id))?
        else {
            return Ok(None);
        };

        let holes = SqliteHoleRepository::new(db.connection()).list_for_round(id)?;
        Ok(Some(RoundWithHoles { round, holes }))
    }

    /// The caller's rounds, complete or not, newest first.
    ///
    /// A missing or zero `limit` falls back to the configured default.
    pub async fn get_rounds(
        &self,
        owner: Option<&OwnerId>,
        limit: Option<usize>,
    ) -> Result<Vec<Round>> {
        let Some(owner) = owner else {
            return Ok(Vec::new());
        };
        let limit = limit
            .filter(|&limit| limit > 0)
            .unwrap_or(self.config.rounds_list_default);
        let db = self.db.lock().await;
        SqliteRoundRepository::new(db.connection()).list(owner, limit)
    }

    /// Freeze the given totals and mark the round complete.
    ///
    /// Calling it again overwrites the totals and completion time.
    pub async fn complete_round(
        &self,
        owner: Option<&OwnerId>,
        id: &RoundId,
        totals: RoundTotals,
    ) -> Result<Round> {
        let owner = Self::require(owner)?;
        let db = self.db.lock().await;
        let round = SqliteRoundRepository::new(db.connection()).complete(owner, id, totals)?;
        tracing::info!(
            "Completed round {id}: {} on par {}",
            totals.total_score,
            totals.total_par
        );

        Self::refresh_stats_cache(db.connection(), owner);
        Ok(round)
    }

    /// Complete a round with totals summed from its logged holes.
    ///
    /// Holes are read and totals frozen in one transaction.
    pub async fn finish_round(&self, owner: Option<&OwnerId>, id: &RoundId) -> Result<Round> {
        let owner = Self::require(owner)?;
        let db = self.db.lock().await;
        let round = SqliteRoundRepository::new(db.connection()).finish(owner, id)?;
        tracing::info!(
            "Finished round {id}: {} on par {}",
            round.total_score.unwrap_or_default(),
            round.total_par.unwrap_or_default()
        );

        Self::refresh_stats_cache(db.connection(), owner);
        Ok(round)
    }

    /// Delete a round and its holes. Deleting an absent round succeeds.
    pub async fn delete_round(&self, owner: Option<&OwnerId>, id: &RoundId) -> Result<DeletedRound> {
        let owner = Self::require(owner)?;
        let db = self.db.lock().await;
        let deleted = SqliteRoundRepository::new(db.connection()).delete(owner, id)?;

        if deleted.round_deleted {
            tracing::info!(
                "Deleted round {id} and {} holes",
                deleted.holes_deleted
            );
        }
        if deleted.was_complete {
            Self::refresh_stats_cache(db.connection(), owner);
        }
        Ok(deleted)
    }

    /// Delete every round the caller owns. Returns the number of rounds removed.
    pub async fn delete_all_rounds(&self, owner: Option<&OwnerId>) -> Result<usize> {
        let owner = Self::require(owner)?;
        let db = self.db.lock().await;
        let deleted = SqliteRoundRepository::new(db.connection()).delete_all(owner)?;
        tracing::info!("Deleted all {deleted} rounds of {owner}");

        Self::clear_stats_cache(db.connection(), owner);
        Ok(deleted)
    }

    /// Scorecard summary of one round.
    pub async fn round_summary(
        &self,
        owner: Option<&OwnerId>,
        id: &RoundId,
    ) -> Result<Option<RoundSummary>> {
        self.get_round(owner, id)
            .await?
            .map(|round| RoundSummary::from_holes(&round.holes))
            .transpose()
    }

    /// The caller's round IDs starting with `prefix`, newest first.
    pub async fn list_round_ids_by_prefix(
        &self,
        owner: Option<&OwnerId>,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<String>> {
        let Some(owner) = owner else {
            return Ok(Vec::new());
        };
        let db = self.db.lock().await;
        SqliteRoundRepository::new(db.connection()).list_ids_by_prefix(owner, prefix, limit)
    }
}
