//! IngestionEngine: decay-then-apply-then-derive over a single venue record.

use chrono::{DateTime, Utc};
use tracing::debug;

use venue_core::config::VenueConfig;
use venue_core::constants::{DAILY_RETENTION, REVIEW_WEIGHT};
use venue_core::errors::VenueResult;
use venue_core::traits::{IReviewValidator, IVenueStore};
use venue_core::venue::{Review, VenueKey, VenueRecord};
use venue_validation::ReviewValidator;

/// A record ready for ingestion, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedVenue {
    pub record: VenueRecord,
    /// False when the record was freshly reset because the key was unknown.
    pub found: bool,
    /// Stored version to compare against on write; `None` for a fresh record.
    pub version: Option<u64>,
}

/// The ingestion algorithm. Holds its validator and decay parameters
/// explicitly; there is no shared global state.
pub struct IngestionEngine<V = ReviewValidator> {
    validator: V,
    daily_retention: f64,
    review_weight: f64,
}

impl IngestionEngine<ReviewValidator> {
    /// Engine with the default validator, 0.99 daily retention and unit weight.
    pub fn new() -> Self {
        Self::with_validator(ReviewValidator::new())
    }

    /// Engine with retention and weight taken from `config`, which must validate.
    pub fn from_config(config: &VenueConfig) -> VenueResult<Self> {
        config.validate()?;
        Ok(Self {
            validator: ReviewValidator::new(),
            daily_retention: config.decay.daily_retention,
            review_weight: config.ingestion.review_weight,
        })
    }
}

impl Default for IngestionEngine<ReviewValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: IReviewValidator> IngestionEngine<V> {
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            daily_retention: DAILY_RETENTION,
            review_weight: REVIEW_WEIGHT,
        }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn daily_retention(&self) -> f64 {
        self.daily_retention
    }

    /// Run the validation gate without touching any record.
    pub fn validate(&self, review: &Review) -> VenueResult<()> {
        self.validator.validate(review)
    }

    /// Load the record for `key`, or reset a fresh one stamped at `now` if
    /// the store has none. Lookup faults propagate; only "not found"
    /// initializes.
    pub fn load_or_initialize(
        &self,
        store: &dyn IVenueStore,
        key: &VenueKey,
        now: DateTime<Utc>,
    ) -> VenueResult<LoadedVenue> {
        match store.load(key)? {
            Some(stored) => Ok(LoadedVenue {
                record: stored.record,
                found: true,
                version: Some(stored.version),
            }),
            None => {
                debug!(venue = %key, "no record yet, initializing");
                Ok(LoadedVenue {
                    record: VenueRecord::reset(key.clone(), now),
                    found: false,
                    version: None,
                })
            }
        }
    }

    /// Validate `review`, then return a copy of `record` aged to `now` with
    /// the review folded in. `record` itself is never modified, so the call
    /// can be repeated from a fresh load after a write conflict.
    pub fn ingest_review(
        &self,
        record: &VenueRecord,
        review: &Review,
        now: DateTime<Utc>,
    ) -> VenueResult<VenueRecord> {
        self.validate(review)?;

        let mut updated = record.clone();
        {
            let _span = venue_observability::decay_span!(record.key()).entered();
            let decayed = updated.depreciate_all_with(now, self.daily_retention);
            debug!(decayed, "aged accumulators");
        }
        updated.apply_review_weighted(review, self.review_weight);
        debug!(
            venue = %updated.key(),
            policy = %updated.smoking_policy(),
            smokers = %updated.air_quality_smokers(),
            nonsmokers = %updated.air_quality_nonsmokers(),
            "applied review"
        );
        Ok(updated)
    }
}
