//! Query execution and positional row decoding shared by the repositories.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tokio_stream::StreamExt;

use crate::catalog::{EventStatus, Race, SportEvent};
use crate::persistence::PersistenceError;
use crate::query::{EntitySchema, SqliteQuery, RACES, SPORTS};

// ── Execution ──────────────────────────────────────────────────────────

/// Run `query` and map every row, aborting on the first row that fails to map.
///
/// Rows are pulled from a cursor stream; returning early drops the stream,
/// which releases the cursor and its connection.
pub async fn fetch_mapped<T>(
    pool: &SqlitePool,
    mut query: SqliteQuery,
    map: fn(&SqliteRow) -> Result<T, PersistenceError>,
) -> Result<Vec<T>, PersistenceError> {
    let mut rows = query.build().fetch(pool);
    let mut records = Vec::new();
    while let Some(row) = rows.next().await {
        records.push(map(&row?)?);
    }
    Ok(records)
}

/// Run a single-row lookup. Zero rows is `Ok(None)`.
pub async fn fetch_optional_mapped<T>(
    pool: &SqlitePool,
    mut query: SqliteQuery,
    map: fn(&SqliteRow) -> Result<T, PersistenceError>,
) -> Result<Option<T>, PersistenceError> {
    let row = query.build().fetch_optional(pool).await?;
    row.as_ref().map(map).transpose()
}

// ── Timestamps ─────────────────────────────────────────────────────────

/// Wire format for `advertised_start_time`: RFC 3339, UTC, whole seconds.
pub fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored `advertised_start_time` back into a UTC instant.
pub fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| PersistenceError::Mapping(format!("invalid timestamp {raw:?}: {e}")))
}

// ── Row mapping ────────────────────────────────────────────────────────

fn expect_shape(row: &SqliteRow, schema: &EntitySchema) -> Result<(), PersistenceError> {
    if row.len() != schema.columns.len() {
        return Err(PersistenceError::Mapping(format!(
            "{} row has {} columns, expected {}",
            schema.table,
            row.len(),
            schema.columns.len()
        )));
    }
    Ok(())
}

/// Decode a row projected with [`RACES`] columns. Status is left at its
/// default; callers derive it afterwards.
pub fn map_race_row(row: &SqliteRow) -> Result<Race, PersistenceError> {
    expect_shape(row, &RACES)?;
    let visible: i64 = row.try_get(4)?;
    let start: String = row.try_get(5)?;
    Ok(Race {
        id: row.try_get(0)?,
        meeting_id: row.try_get(1)?,
        name: row.try_get(2)?,
        number: row.try_get(3)?,
        visible: visible != 0,
        advertised_start_time: decode_timestamp(&start)?,
        status: EventStatus::default(),
    })
}

/// Decode a row projected with [`SPORTS`] columns.
pub fn map_sport_event_row(row: &SqliteRow) -> Result<SportEvent, PersistenceError> {
    expect_shape(row, &SPORTS)?;
    let start: String = row.try_get(2)?;
    Ok(SportEvent {
        id: row.try_get(0)?,
        name: row.try_get(1)?,
        advertised_start_time: decode_timestamp(&start)?,
        sport: row.try_get(3)?,
        current_score: row.try_get(4)?,
        status: EventStatus::default(),
    })
}
