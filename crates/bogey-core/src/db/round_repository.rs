//! Round repository implementation

#![allow(clippy::cast_possible_wrap)] // SQLite uses i64 for LIMIT

use crate::error::{Error, Result};
use crate::models::{OwnerId, Round, RoundId, RoundTotals};
use crate::util::normalize_text_option;
use rusqlite::{params, Connection, OptionalExtension};

use super::columns;
use super::hole_repository::{HoleRepository, SqliteHoleRepository};

const ROUND_COLUMNS: &str = "id, owner_id, course_name, date, created_at, is_complete, total_score, total_par, completed_at";

/// Outcome of deleting a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedRound {
    /// Holes removed along with the round
    pub holes_deleted: usize,
    /// False when the round was already gone
    pub round_deleted: bool,
    /// Whether the removed round had been completed
    pub was_complete: bool,
}

/// Trait for round storage operations
///
/// Every method that takes an owner rejects rounds belonging to someone else
/// with `Error::Unauthorized` and missing rounds with `Error::NotFound`.
pub trait RoundRepository {
    /// Start a new round
    fn create(&self, owner: &OwnerId, course_name: &str) -> Result<Round>;

    /// Get a round by ID regardless of owner
    fn get(&self, id: &RoundId) -> Result<Option<Round>>;

    /// Get a round the owner may access
    fn get_owned(&self, owner: &OwnerId, id: &RoundId) -> Result<Round>;

    /// List the owner's rounds, newest first
    fn list(&self, owner: &OwnerId, limit: usize) -> Result<Vec<Round>>;

    /// List the owner's completed rounds, newest first (`None` = all)
    fn list_completed(&self, owner: &OwnerId, limit: Option<usize>) -> Result<Vec<Round>>;

    /// Freeze totals and mark the round complete
    fn complete(&self, owner: &OwnerId, id: &RoundId, totals: RoundTotals) -> Result<Round>;

    /// Sum the round's stored holes and complete it in one transaction
    fn finish(&self, owner: &OwnerId, id: &RoundId) -> Result<Round>;

    /// Delete a round and its holes
    fn delete(&self, owner: &OwnerId, id: &RoundId) -> Result<DeletedRound>;

    /// Delete every round the owner has, with their holes
    fn delete_all(&self, owner: &OwnerId) -> Result<usize>;

    /// Round IDs starting with `prefix`, newest first
    fn list_ids_by_prefix(&self, owner: &OwnerId, prefix: &str, limit: usize)
        -> Result<Vec<String>>;
}

/// Check that `owner` may access the round
pub(super) fn check_owner(conn: &Connection, owner: &OwnerId, id: &RoundId) -> Result<()> {
    let stored: Option<String> = conn
        .query_row(
            "SELECT owner_id FROM rounds WHERE id = ?",
            params![id.as_str()],
            |row| row.get(0),
        )
        .optional()?;

    match stored {
        None => Err(Error::NotFound(format!("round {id}"))),
        Some(stored) if stored == owner.as_str() => Ok(()),
        Some(_) => {
            tracing::debug!("Rejected access to round {id} for {owner}");
            Err(Error::Unauthorized(format!("round {id}")))
        }
    }
}

/// Store frozen totals and mark the round complete
fn write_totals(
    conn: &Connection,
    owner: &OwnerId,
    id: &RoundId,
    totals: RoundTotals,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp_millis();
    conn.execute(
        "UPDATE rounds
         SET total_score = ?, total_par = ?, completed_at = ?, is_complete = 1
         WHERE id = ? AND owner_id = ?",
        params![
            totals.total_score,
            totals.total_par,
            now,
            id.as_str(),
            owner.as_str()
        ],
    )?;
    Ok(())
}

/// `SQLite` implementation of `RoundRepository`
pub struct SqliteRoundRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRoundRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a round from a database row
    fn parse_round(row: &rusqlite::Row<'_>) -> rusqlite::Result<Round> {
        Ok(Round {
            id: columns::id(row, 0)?,
            owner_id: columns::owner(row, 1)?,
            course_name: row.get(2)?,
            date: row.get(3)?,
            created_at: row.get(4)?,
            is_complete: row.get::<_, i32>(5)? != 0,
            total_score: row.get(6)?,
            total_par: row.get(7)?,
            completed_at: row.get(8)?,
        })
    }
}

impl RoundRepository for SqliteRoundRepository<'_> {
    fn create(&self, owner: &OwnerId, course_name: &str) -> Result<Round> {
        let course_name = normalize_text_option(Some(course_name.to_string()))
            .ok_or_else(|| Error::Validation("course name cannot be empty".into()))?;
        let round = Round::new(owner.clone(), course_name);

        self.conn.execute(
            "INSERT INTO rounds (id, owner_id, course_name, date, created_at, is_complete)
             VALUES (?, ?, ?, ?, ?, 0)",
            params![
                round.id.as_str(),
                round.owner_id.as_str(),
                round.course_name,
                round.date,
                round.created_at
            ],
        )?;

        Ok(round)
    }

    fn get(&self, id: &RoundId) -> Result<Option<Round>> {
        let round = self
            .conn
            .query_row(
                &format!("SELECT {ROUND_COLUMNS} FROM rounds WHERE id = ?"),
                params![id.as_str()],
                Self::parse_round,
            )
            .optional()?;

        Ok(round)
    }

    fn get_owned(&self, owner: &OwnerId, id: &RoundId) -> Result<Round> {
        let round = self
            .get(id)?
            .ok_or_else(|| Error::NotFound(format!("round {id}")))?;

        if round.owner_id != *owner {
            tracing::debug!("Rejected access to round {id} for {owner}");
            return Err(Error::Unauthorized(format!("round {id}")));
        }

        Ok(round)
    }

    fn list(&self, owner: &OwnerId, limit: usize) -> Result<Vec<Round>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ROUND_COLUMNS}
             FROM rounds
             WHERE owner_id = ?
             ORDER BY date DESC, id DESC
             LIMIT ?"
        ))?;

        let rounds = stmt
            .query_map(params![owner.as_str(), limit as i64], Self::parse_round)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rounds)
    }

    fn list_completed(&self, owner: &OwnerId, limit: Option<usize>) -> Result<Vec<Round>> {
        // A negative LIMIT means no limit in SQLite
        let limit = limit.map_or(-1, |limit| limit as i64);

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ROUND_COLUMNS}
             FROM rounds
             WHERE owner_id = ? AND is_complete = 1
             ORDER BY date DESC, id DESC
             LIMIT ?"
        ))?;

        let rounds = stmt
            .query_map(params![owner.as_str(), limit], Self::parse_round)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rounds)
    }

    fn complete(&self, owner: &OwnerId, id: &RoundId, totals: RoundTotals) -> Result<Round> {
        let tx = self.conn.unchecked_transaction()?;
        check_owner(&tx, owner, id)?;
        write_totals(&tx, owner, id, totals)?;
        tx.commit()?;

        self.get(id)?
            .ok_or_else(|| Error::NotFound(format!("round {id}")))
    }

    fn finish(&self, owner: &OwnerId, id: &RoundId) -> Result<Round> {
        let tx = self.conn.unchecked_transaction()?;
        check_owner(&tx, owner, id)?;
        let holes = SqliteHoleRepository::new(&tx).list_for_round(id)?;
        let totals = RoundTotals::from_holes(&holes)?;
        write_totals(&tx, owner, id, totals)?;
        tx.commit()?;

        self.get(id)?
            .ok_or_else(|| Error::NotFound(format!("round {id}")))
    }

    fn delete(&self, owner: &OwnerId, id: &RoundId) -> Result<DeletedRound> {
        let tx = self.conn.unchecked_transaction()?;

        let was_complete = match check_owner(&tx, owner, id) {
            Ok(()) => tx.query_row(
                "SELECT is_complete FROM rounds WHERE id = ?",
                params![id.as_str()],
                |row| row.get::<_, i32>(0),
            )? != 0,
            // Already gone: a retried delete succeeds
            Err(Error::NotFound(_)) => return Ok(DeletedRound::default()),
            Err(error) => return Err(error),
        };

        let holes_deleted = tx.execute(
            "DELETE FROM holes WHERE round_id = ?",
            params![id.as_str()],
        )?;
        let rounds_deleted = tx.execute(
            "DELETE FROM rounds WHERE id = ? AND owner_id = ?",
            params![id.as_str(), owner.as_str()],
        )?;
        tx.commit()?;

        Ok(DeletedRound {
            holes_deleted,
            round_deleted: rounds_deleted > 0,
            was_complete,
        })
    }

    fn delete_all(&self, owner: &OwnerId) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "DELETE FROM holes WHERE round_id IN (SELECT id FROM rounds WHERE owner_id = ?)",
            params![owner.as_str()],
        )?;
        let rounds_deleted = tx.execute(
            "DELETE FROM rounds WHERE owner_id = ?",
            params![owner.as_str()],
        )?;
        tx.commit()?;

        Ok(rounds_deleted)
    }

    fn list_ids_by_prefix(
        &self,
        owner: &OwnerId,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<String>> {
        let prefix = prefix.trim().to_ascii_lowercase();
        // IDs are hyphenated hex; anything else can't match and must not reach LIKE
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(
            "SELECT id FROM rounds
             WHERE owner_id = ? AND id LIKE ? || '%'
             ORDER BY date DESC, id DESC
             LIMIT ?",
        )?;

        let ids = stmt
            .query_map(params![owner.as_str(), prefix, limit as i64], |row| {
                row.get::<_, String>(0)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(ids)
    }
}
