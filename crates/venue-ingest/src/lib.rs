//! # venue-ingest
//!
//! Folds reviews into venue records.
//!
//! - [`IngestionEngine`]: validates, ages the record to `now`, applies the
//!   review and derives the summary fields. Only loads from storage and
//!   never retries.
//! - [`ReviewService`]: runs the load → ingest → compare-and-swap store
//!   cycle per key with bounded retry on version conflict, and answers
//!   summary lookups.

pub mod engine;
pub mod service;

pub use engine::{IngestionEngine, LoadedVenue};
pub use service::ReviewService;
