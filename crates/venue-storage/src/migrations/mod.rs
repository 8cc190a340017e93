//! Schema migrations, applied in order and tracked in `PRAGMA user_version`.

mod v001_venues;

use rusqlite::Connection;
use tracing::info;

use venue_core::errors::StorageError;

use crate::to_storage_err;

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_venues::migrate)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        info!(version, "applied venue schema migration");
    }
    Ok(())
}
