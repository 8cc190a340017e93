/// Storage-layer faults, wrapped by [`super::VenueError`] as lookup or store failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt record for venue {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("storage lock poisoned: {message}")]
    LockPoisoned { message: String },
}
