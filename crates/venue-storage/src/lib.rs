//! # venue-storage
//!
//! Persistence for venue records behind [`venue_core::traits::IVenueStore`].
//!
//! - [`SqliteVenueStore`]: one table keyed by venue, JSON record, version
//!   column for optimistic concurrency, migrations tracked in `user_version`
//! - [`InMemoryVenueStore`]: `DashMap` backed, for tests and embedding

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::SqliteVenueStore;
pub use memory::InMemoryVenueStore;

use venue_core::errors::StorageError;

pub(crate) fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::SqliteError {
        message: message.into(),
    }
}

/// Result of a compare-and-swap write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    /// Written; carries the new version.
    Stored(u64),
    /// The stored version (if any) did not match the expected one.
    Conflict { actual: Option<u64> },
}
