use super::StorageError;

/// Top-level error for venue ratings.
#[derive(Debug, thiserror::Error)]
pub enum VenueError {
    #[error("venue not found: {key}")]
    NotFound { key: String },

    #[error("lookup failed for venue {key}: {source}")]
    LookupFailed {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("invalid review: {reason}")]
    InvalidReview { reason: String },

    #[error("invalid venue key: {key:?}")]
    InvalidKey { key: String },

    #[error("store failed for venue {key}: {source}")]
    StoreFailed {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("version conflict on venue {key}: expected {expected:?}, found {actual:?}")]
    VersionConflict {
        key: String,
        expected: Option<u64>,
        actual: Option<u64>,
    },

    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VenueError {
    /// Whether the whole load → ingest → store cycle may be retried from a fresh load.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }
}
