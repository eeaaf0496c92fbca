//! Hole repository implementation

use crate::error::{Error, Result};
use crate::models::{DoubleBogeyOrWorse, Hole, HoleInput, OwnerId, RoundId};
use rusqlite::{params, Connection, OptionalExtension};

use super::columns;
use super::round_repository::check_owner;

const HOLE_COLUMNS: &str = "id, round_id, hole_number, par, strokes, out_of_position, failed_easy_up_down, double_bogey_cause, three_putt, penalty, wedge_range, hero_shots_avoided, created_at, updated_at";

/// Trait for hole storage operations
pub trait HoleRepository {
    /// Insert or fully overwrite the hole `(round_id, input.hole_number)`.
    ///
    /// Fails with `Error::Unauthorized` when the round is missing or owned by
    /// someone else.
    fn upsert(&self, owner: &OwnerId, round_id: &RoundId, input: HoleInput) -> Result<Hole>;

    /// Get one hole of a round
    fn get(&self, round_id: &RoundId, hole_number: u8) -> Result<Option<Hole>>;

    /// All holes of a round, ascending by hole number
    fn list_for_round(&self, round_id: &RoundId) -> Result<Vec<Hole>>;
}

/// `SQLite` implementation of `HoleRepository`
pub struct SqliteHoleRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteHoleRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a hole from a database row.
    ///
    /// The double bogey flag is recomputed from strokes and par; only the
    /// cause is stored.
    fn parse_hole(row: &rusqlite::Row<'_>) -> rusqlite::Result<Hole> {
        let par: u8 = row.get(3)?;
        let strokes: u32 = row.get(4)?;

        Ok(Hole {
            id: columns::id(row, 0)?,
            round_id: columns::id(row, 1)?,
            hole_number: row.get(2)?,
            par,
            strokes,
            out_of_position: columns::json(row, 5)?,
            failed_easy_up_down: columns::json(row, 6)?,
            double_bogey_or_worse: DoubleBogeyOrWorse::derive(strokes, par, row.get(7)?),
            three_putt: columns::json(row, 8)?,
            penalty: columns::json(row, 9)?,
            wedge_range: columns::json(row, 10)?,
            hero_shots_avoided: columns::json(row, 11)?,
            created_at: row.get(12)?,
            updated_at: row.get(13)?,
        })
    }

    fn write(&self, hole: &Hole) -> Result<()> {
        self.conn.execute(
            "INSERT INTO holes (
                 id, round_id, hole_number, par, strokes,
                 out_of_position, failed_easy_up_down, double_bogey_cause, three_putt,
                 penalty, wedge_range, hero_shots_avoided, created_at, updated_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(round_id, hole_number) DO UPDATE SET
                 par = excluded.par,
                 strokes = excluded.strokes,
                 out_of_position = excluded.out_of_position,
                 failed_easy_up_down = excluded.failed_easy_up_down,
                 double_bogey_cause = excluded.double_bogey_cause,
                 three_putt = excluded.three_putt,
                 penalty = excluded.penalty,
                 wedge_range = excluded.wedge_range,
                 hero_shots_avoided = excluded.hero_shots_avoided,
                 updated_at = excluded.updated_at",
            params![
                hole.id.as_str(),
                hole.round_id.as_str(),
                hole.hole_number,
                hole.par,
                hole.strokes,
                columns::to_json(hole.out_of_position.as_ref())?,
                columns::to_json(hole.failed_easy_up_down.as_ref())?,
                hole.double_bogey_or_worse.caused_by,
                columns::to_json(hole.three_putt.as_ref())?,
                columns::to_json(hole.penalty.as_ref())?,
                columns::to_json(hole.wedge_range.as_ref())?,
                columns::to_json(hole.hero_shots_avoided.as_ref())?,
                hole.created_at,
                hole.updated_at
            ],
        )?;

        Ok(())
    }
}

impl HoleRepository for SqliteHoleRepository<'_> {
    fn upsert(&self, owner: &OwnerId, round_id: &RoundId, input: HoleInput) -> Result<Hole> {
        input.validate()?;
        let hole_number = input.hole_number;

        let tx = self.conn.unchecked_transaction()?;
        check_owner(&tx, owner, round_id).map_err(|error| match error {
            Error::NotFound(what) => Error::Unauthorized(what),
            other => other,
        })?;

        self.write(&Hole::from_input(*round_id, input))?;
        let stored = self
            .get(round_id, hole_number)?
            .ok_or_else(|| Error::Database(format!("hole {hole_number} missing after save")))?;
        tx.commit()?;

        tracing::debug!(
            "Saved hole {hole_number} of round {round_id} ({} strokes, par {})",
            stored.strokes,
            stored.par
        );
        Ok(stored)
    }

    fn get(&self, round_id: &RoundId, hole_number: u8) -> Result<Option<Hole>> {
        let hole = self
            .conn
            .query_row(
                &format!("SELECT {HOLE_COLUMNS} FROM holes WHERE round_id = ? AND hole_number = ?"),
                params![round_id.as_str(), hole_number],
                Self::parse_hole,
            )
            .optional()?;

        Ok(hole)
    }

    fn list_for_round(&self, round_id: &RoundId) -> Result<Vec<Hole>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {HOLE_COLUMNS}
             FROM holes
             WHERE round_id = ?
             ORDER BY hole_number ASC"
        ))?;

        let holes = stmt
            .query_map(params![round_id.as_str()], Self::parse_hole)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(holes)
    }
}
