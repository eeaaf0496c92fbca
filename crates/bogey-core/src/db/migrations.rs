//! Database migrations

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension};

/// Current schema version
const CURRENT_VERSION: i32 = 2;

/// Run all pending migrations
pub fn run(conn: &Connection) -> Result<()> {
    let version = get_version(conn)?;

    if version < 1 {
        migrate_v1(conn)?;
    }
    if version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

/// Get the current schema version
fn get_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or(0);

    Ok(version)
}

/// Apply a batch of statements atomically
fn apply(conn: &Connection, statements: &str, version: i32) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(statements)?;
    tx.execute("INSERT INTO schema_version (version) VALUES (?)", [version])?;
    tx.commit()?;

    tracing::info!("Migrated database to version {version}");
    Ok(())
}

/// Migration to version 1: rounds and holes
fn migrate_v1(conn: &Connection) -> Result<()> {
    apply(
        conn,
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );
        CREATE TABLE IF NOT EXISTS rounds (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            course_name TEXT NOT NULL,
            date INTEGER NOT NULL,
            created_at INTEGER NOT NULL,
            is_complete INTEGER NOT NULL DEFAULT 0,
            total_score INTEGER,
            total_par INTEGER,
            completed_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_rounds_owner ON rounds(owner_id);
        CREATE INDEX IF NOT EXISTS idx_rounds_owner_date ON rounds(owner_id, date DESC);
        CREATE TABLE IF NOT EXISTS holes (
            id TEXT PRIMARY KEY,
            round_id TEXT NOT NULL REFERENCES rounds(id) ON DELETE CASCADE,
            hole_number INTEGER NOT NULL CHECK (hole_number BETWEEN 1 AND 18),
            par INTEGER NOT NULL CHECK (par BETWEEN 3 AND 5),
            strokes INTEGER NOT NULL CHECK (strokes >= 1),
            out_of_position TEXT,
            failed_easy_up_down TEXT,
            double_bogey_cause TEXT,
            three_putt TEXT,
            penalty TEXT,
            wedge_range TEXT,
            hero_shots_avoided TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            UNIQUE (round_id, hole_number)
        );
        CREATE INDEX IF NOT EXISTS idx_holes_round ON holes(round_id, hole_number);",
        1,
    )
}

/// Migration to version 2: per-user stats cache
fn migrate_v2(conn: &Connection) -> Result<()> {
    apply(
        conn,
        "CREATE TABLE IF NOT EXISTS user_stats (
            owner_id TEXT PRIMARY KEY,
            rounds_played INTEGER NOT NULL,
            average_score INTEGER NOT NULL,
            averages TEXT NOT NULL,
            last_updated INTEGER NOT NULL
        );",
        2,
    )
}
