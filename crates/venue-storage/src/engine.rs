//! SqliteVenueStore: owns the connection, runs migrations on open,
//! implements IVenueStore.

use std::path::Path;

use tracing::debug;

use venue_core::config::StorageConfig;
use venue_core::errors::{VenueError, VenueResult};
use venue_core::traits::{IVenueStore, StoredVenue};
use venue_core::venue::{VenueKey, VenueRecord};

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::venue_crud;
use crate::CasOutcome;

/// SQLite-backed venue store.
pub struct SqliteVenueStore {
    conn: WriteConnection,
}

impl SqliteVenueStore {
    /// Open (or create) the database at `path` with default settings.
    pub fn open(path: &Path) -> VenueResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> VenueResult<Self> {
        let conn = WriteConnection::open(path, config)?;
        Self::initialize(conn)
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> VenueResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Private in-memory database (for testing).
    pub fn open_in_memory() -> VenueResult<Self> {
        let conn = WriteConnection::open_in_memory(&StorageConfig::default())?;
        Self::initialize(conn)
    }

    fn initialize(conn: WriteConnection) -> VenueResult<Self> {
        conn.with_conn_sync(migrations::run_migrations)?;
        Ok(Self { conn })
    }

    pub fn schema_version(&self) -> VenueResult<u32> {
        Ok(self.conn.with_conn_sync(migrations::current_version)?)
    }

    pub fn count(&self) -> VenueResult<usize> {
        Ok(self.conn.with_conn_sync(venue_crud::count_venues)?)
    }
}

impl IVenueStore for SqliteVenueStore {
    fn load(&self, key: &VenueKey) -> VenueResult<Option<StoredVenue>> {
        self.conn
            .with_conn_sync(|conn| venue_crud::get_venue(conn, key))
            .map_err(|source| VenueError::LookupFailed {
                key: key.to_string(),
                source,
            })
    }

    fn store(&self, record: &VenueRecord, expected_version: Option<u64>) -> VenueResult<u64> {
        let outcome = self
            .conn
            .with_conn_sync(|conn| venue_crud::put_venue_if_version(conn, record, expected_version))
            .map_err(|source| VenueError::StoreFailed {
                key: record.key().to_string(),
                source,
            })?;

        match outcome {
            CasOutcome::Stored(version) => {
                debug!(venue = %record.key(), version, "stored venue");
                Ok(version)
            }
            CasOutcome::Conflict { actual } => Err(VenueError::VersionConflict {
                key: record.key().to_string(),
                expected: expected_version,
                actual,
            }),
        }
    }
}
