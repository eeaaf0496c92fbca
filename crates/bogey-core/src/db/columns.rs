//! Column conversions shared by the repositories

use rusqlite::types::Type;
use rusqlite::Row;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;

use crate::error::Result;
use crate::models::OwnerId;

fn conversion_error<E>(idx: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(error))
}

/// Read a UUID-backed id column
pub fn id<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = uuid::Error>,
{
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|error| conversion_error(idx, error))
}

pub fn owner(row: &Row<'_>, idx: usize) -> rusqlite::Result<OwnerId> {
    let raw: String = row.get(idx)?;
    OwnerId::new(raw).map_err(|error| conversion_error(idx, error))
}

/// Read a nullable JSON text column
pub fn json<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|text| serde_json::from_str(&text).map_err(|error| conversion_error(idx, error)))
        .transpose()
}

/// Encode an optional value as JSON text, `NULL` when absent
pub fn to_json<T: Serialize>(value: Option<&T>) -> Result<Option<String>> {
    Ok(value.map(serde_json::to_string).transpose()?)
}
