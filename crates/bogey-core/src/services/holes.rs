//! Hole recording operations.

use super::GolfService;
use crate::db::{HoleRepository, RoundRepository, SqliteHoleRepository, SqliteRoundRepository};
use crate::models::{Hole, HoleInput, OwnerId, RoundId};
use crate::Result;

impl GolfService {
    /// Insert or fully overwrite one hole of the caller's round.
    ///
    /// Input is validated before the store is touched. The double bogey flag
    /// is derived from strokes and par; round totals are left alone.
    pub async fn save_hole(
        &self,
        owner: Option<&OwnerId>,
        round_id: &RoundId,
        input: HoleInput,
    ) -> Result<Hole> {
        let owner = Self::require(owner)?;
        input.validate()?;

        let db = self.db.lock().await;
        SqliteHoleRepository::new(db.connection()).upsert(owner, round_id, input)
    }

    /// One hole of a round, or `None` when absent or not visible.
    pub async fn get_hole(
        &self,
        owner: Option<&OwnerId>,
        round_id: &RoundId,
        hole_number: u8,
    ) -> Result<Option<Hole>> {
        let Some(owner) = owner else {
            return Ok(None);
        };
        let db = self.db.lock().await;
        if Self::tolerant(SqliteRoundRepository::new(db.connection()).get_owned(owner, round_id))?
            .is_none()
        {
            return Ok(None);
        }

        SqliteHoleRepository::new(db.connection()).get(round_id, hole_number)
    }

    /// All holes of a round ascending by number; empty when not visible.
    pub async fn get_holes_for_round(
        &self,
        owner: Option<&OwnerId>,
        round_id: &RoundId,
    ) -> Result<Vec<Hole>> {
        let Some(owner) = owner else {
            return Ok(Vec::new());
        };
        let db = self.db.lock().await;
        if Self::tolerant(SqliteRoundRepository::new(db.connection()).get_owned(owner, round_id))?
            .is_none()
        {
            return Ok(Vec::new());
        }

        SqliteHoleRepository::new(db.connection()).list_for_round(round_id)
    }
}
