//! Get and compare-and-swap put for venue rows.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use venue_core::errors::StorageError;
use venue_core::traits::StoredVenue;
use venue_core::venue::{VenueKey, VenueRecord};

use crate::{to_storage_err, CasOutcome};

/// Fetch and decode a venue row.
pub fn get_venue(conn: &Connection, key: &VenueKey) -> Result<Option<StoredVenue>, StorageError> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "SELECT record, version FROM venues WHERE key = ?1",
            params![key.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match row {
        Some((json, version)) => {
            let record: VenueRecord =
                serde_json::from_str(&json).map_err(|e| StorageError::CorruptRecord {
                    key: key.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(Some(StoredVenue {
                record,
                version: version as u64,
            }))
        }
        None => Ok(None),
    }
}

/// Write `record` if the row's version equals `expected`, inside an
/// immediate transaction.
pub fn put_venue_if_version(
    conn: &Connection,
    record: &VenueRecord,
    expected: Option<u64>,
) -> Result<CasOutcome, StorageError> {
    let json = serde_json::to_string(record).map_err(|e| StorageError::CorruptRecord {
        key: record.key().to_string(),
        reason: e.to_string(),
    })?;

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("put_venue begin: {e}")))?;

    match put_inner(&tx, record.key(), &json, expected) {
        Ok(CasOutcome::Stored(version)) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("put_venue commit: {e}")))?;
            Ok(CasOutcome::Stored(version))
        }
        Ok(conflict) => {
            let _ = tx.rollback();
            Ok(conflict)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn put_inner(
    conn: &Connection,
    key: &VenueKey,
    json: &str,
    expected: Option<u64>,
) -> Result<CasOutcome, StorageError> {
    let actual: Option<u64> = conn
        .query_row(
            "SELECT version FROM venues WHERE key = ?1",
            params![key.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .map(|v| v as u64);

    if actual != expected {
        return Ok(CasOutcome::Conflict { actual });
    }

    let next = expected.map_or(1, |v| v + 1);
    let now = Utc::now().to_rfc3339();
    match expected {
        None => conn.execute(
            "INSERT INTO venues (key, record, version, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![key.as_str(), json, next as i64, now],
        ),
        Some(_) => conn.execute(
            "UPDATE venues SET record = ?2, version = ?3, updated_at = ?4 WHERE key = ?1",
            params![key.as_str(), json, next as i64, now],
        ),
    }
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(CasOutcome::Stored(next))
}

pub fn count_venues(conn: &Connection) -> Result<usize, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM venues", [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .map_err(|e| to_storage_err(e.to_string()))
}
