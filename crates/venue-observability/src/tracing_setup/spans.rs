//! Span definitions per operation: ingestion, decay, storage.

/// Create an ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($key:expr) => {
        tracing::info_span!("venue.ingest", venue = %$key)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($key:expr) => {
        tracing::debug_span!("venue.decay", venue = %$key)
    };
}

/// Create a storage span.
#[macro_export]
macro_rules! storage_span {
    ($op:expr, $key:expr) => {
        tracing::debug_span!("venue.storage", op = $op, venue = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "venue.ingest";
    pub const DECAY: &str = "venue.decay";
    pub const STORAGE: &str = "venue.storage";
}
