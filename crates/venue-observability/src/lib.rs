//! # venue-observability
//!
//! Structured logging setup, span macros for the ingestion path, and
//! lock-free ingestion counters.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{IngestionMetrics, MetricsSnapshot};
pub use tracing_setup::init_tracing;
