//! # venue-core
//!
//! Foundation crate for venue ratings.
//! Defines the decaying valuations, the per-venue record, reviews, errors,
//! config, constants, and the storage/validation traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod valuation;
pub mod venue;

// Re-export the most commonly used types at the crate root.
pub use config::VenueConfig;
pub use errors::{StorageError, VenueError, VenueResult};
pub use valuation::{BoundedDecliningValuation, DecliningValuation};
pub use venue::{Review, ReviewForm, Score, SmokingPolicy, VenueKey, VenueRecord, VenueSummary};
