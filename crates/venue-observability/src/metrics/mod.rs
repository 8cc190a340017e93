//! Ingestion counters shared across threads.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters updated by the review service. All operations are relaxed atomics.
#[derive(Debug, Default)]
pub struct IngestionMetrics {
    reviews_accepted: AtomicU64,
    reviews_rejected: AtomicU64,
    venues_created: AtomicU64,
    version_conflicts: AtomicU64,
    store_failures: AtomicU64,
}

/// Point-in-time copy of [`IngestionMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub reviews_accepted: u64,
    pub reviews_rejected: u64,
    pub venues_created: u64,
    pub version_conflicts: u64,
    pub store_failures: u64,
}

impl IngestionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&self) {
        self.reviews_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.reviews_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_created(&self) {
        self.venues_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_conflict(&self) {
        self.version_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reviews_accepted: self.reviews_accepted.load(Ordering::Relaxed),
            reviews_rejected: self.reviews_rejected.load(Ordering::Relaxed),
            venues_created: self.venues_created.load(Ordering::Relaxed),
            version_conflicts: self.version_conflicts.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }

    /// Serialize the current counters, e.g. for a shutdown log line.
    pub fn snapshot_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }

    /// Zero all counters.
    pub fn reset(&self) {
        for counter in [
            &self.reviews_accepted,
            &self.reviews_rejected,
            &self.venues_created,
            &self.version_conflicts,
            &self.store_failures,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
