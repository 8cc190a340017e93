//! ReviewService: drives load → ingest → store for one key at a time and
//! answers summary lookups.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use venue_core::config::VenueConfig;
use venue_core::errors::{VenueError, VenueResult};
use venue_core::traits::IVenueStore;
use venue_core::venue::{Review, ReviewForm, VenueKey, VenueSummary};
use venue_observability::IngestionMetrics;

use crate::engine::IngestionEngine;

/// Host-side wrapper around the [`IngestionEngine`].
///
/// Concurrent submissions for one key are reconciled by the store's version
/// check: the loser restarts from a fresh load, up to `max_conflict_retries`
/// extra times.
pub struct ReviewService<S> {
    store: S,
    engine: IngestionEngine,
    max_conflict_retries: u32,
    metrics: IngestionMetrics,
}

impl<S: IVenueStore> ReviewService<S> {
    /// Fails with `ConfigError` when `config` does not validate.
    pub fn new(store: S, config: &VenueConfig) -> VenueResult<Self> {
        Ok(Self {
            store,
            engine: IngestionEngine::from_config(config)?,
            max_conflict_retries: config.ingestion.max_conflict_retries,
            metrics: IngestionMetrics::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &IngestionEngine {
        &self.engine
    }

    pub fn metrics(&self) -> &IngestionMetrics {
        &self.metrics
    }

    /// Submit a review for `key` as of the current time.
    pub fn submit_review(&self, key: &str, review: Review) -> VenueResult<VenueSummary> {
        self.submit_review_at(key, review, Utc::now())
    }

    /// Submit a review for `key` as of `now`.
    #[instrument(skip(self, review))]
    pub fn submit_review_at(
        &self,
        key: &str,
        review: Review,
        now: DateTime<Utc>,
    ) -> VenueResult<VenueSummary> {
        let key = VenueKey::parse(key).inspect_err(|_| self.metrics.record_rejected())?;
        self.submit_for_key(&key, &review, now)
    }

    /// Submit a form body as posted by the web client.
    pub fn submit_form(&self, form: ReviewForm) -> VenueResult<VenueSummary> {
        self.submit_form_at(form, Utc::now())
    }

    pub fn submit_form_at(&self, form: ReviewForm, now: DateTime<Utc>) -> VenueResult<VenueSummary> {
        let (key, review) = form
            .into_parts()
            .inspect_err(|_| self.metrics.record_rejected())?;
        self.submit_for_key(&key, &review, now)
    }

    fn submit_for_key(
        &self,
        key: &VenueKey,
        review: &Review,
        now: DateTime<Utc>,
    ) -> VenueResult<VenueSummary> {
        let _span = venue_observability::ingest_span!(key).entered();

        if let Err(e) = self.engine.validate(review) {
            self.metrics.record_rejected();
            warn!(venue = %key, error = %e, "rejected review");
            return Err(e);
        }

        let mut retries = 0;
        loop {
            match self.ingest_once(key, review, now) {
                Ok(summary) => {
                    self.metrics.record_accepted();
                    return Ok(summary);
                }
                Err(e) if e.is_conflict() => {
                    self.metrics.record_conflict();
                    if retries >= self.max_conflict_retries {
                        warn!(venue = %key, retries, "giving up after version conflicts");
                        return Err(e);
                    }
                    retries += 1;
                    warn!(venue = %key, retries, "version conflict, reloading");
                }
                Err(e) => {
                    if matches!(e, VenueError::StoreFailed { .. }) {
                        self.metrics.record_store_failure();
                    }
                    return Err(e);
                }
            }
        }
    }

    /// One load → ingest → compare-and-swap store pass.
    fn ingest_once(
        &self,
        key: &VenueKey,
        review: &Review,
        now: DateTime<Utc>,
    ) -> VenueResult<VenueSummary> {
        let loaded = self.engine.load_or_initialize(&self.store, key, now)?;
        let updated = self.engine.ingest_review(&loaded.record, review, now)?;
        let version = {
            let _span = venue_observability::storage_span!("store", key).entered();
            self.store.store(&updated, loaded.version)?
        };
        if !loaded.found {
            self.metrics.record_created();
            info!(venue = %key, "created venue");
        }
        debug!(venue = %key, version, "review ingested");
        Ok(updated.summary())
    }

    /// Public view of one venue; `NotFound` when it has never been reviewed.
    pub fn get_summary(&self, key: &str) -> VenueResult<VenueSummary> {
        let key = VenueKey::parse(key)?;
        match self.store.load(&key)? {
            Some(stored) => Ok(stored.record.summary()),
            None => Err(VenueError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Public views for a comma-separated key list; unknown venues are skipped.
    pub fn list_summaries(&self, keys: &str) -> VenueResult<Vec<VenueSummary>> {
        let keys = VenueKey::parse_list(keys)?;
        Ok(self
            .store
            .load_many(&keys)?
            .into_iter()
            .map(|stored| stored.record.summary())
            .collect())
    }
}
