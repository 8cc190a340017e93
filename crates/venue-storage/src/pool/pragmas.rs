//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use venue_core::config::StorageConfig;
use venue_core::errors::StorageError;

use crate::to_storage_err;

pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> Result<(), StorageError> {
    if config.wal_mode {
        // In-memory databases report "memory" and ignore the request.
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    conn.execute_batch(&format!(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {};
        ",
        config.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
