//! VenueRecord: the stored aggregate, its decay pass and review fold-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DAILY_RETENTION, REVIEW_WEIGHT, VOTE_WEIGHT};
use crate::valuation::{BoundedDecliningValuation, DecliningValuation};

use super::{Review, Score, SmokingPolicy, VenueKey, VenueSummary};

/// The aggregate kept per venue: three policy vote counters, two air-quality
/// accumulators, and the summary fields derived from them.
///
/// Every accumulator carries its own timestamp and ages independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    key: VenueKey,
    smoking_policy: SmokingPolicy,
    air_quality_smokers: Score,
    air_quality_nonsmokers: Score,
    smoking_allowed: DecliningValuation,
    smoking_prohibited: DecliningValuation,
    partial_smoking_allowed: DecliningValuation,
    air_quality_calculation_smokers: BoundedDecliningValuation,
    air_quality_calculation_nonsmokers: BoundedDecliningValuation,
}

/// Current values of the three vote counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoteTally {
    pub allowed: f64,
    pub prohibited: f64,
    pub partial: f64,
}

impl VoteTally {
    /// The policy whose counter is strictly greater than both others.
    /// Any tie, including all zero, yields `Unknown`.
    pub fn leader(&self) -> SmokingPolicy {
        let Self {
            allowed,
            prohibited,
            partial,
        } = *self;
        if allowed > prohibited && allowed > partial {
            SmokingPolicy::Allowed
        } else if prohibited > allowed && prohibited > partial {
            SmokingPolicy::Prohibited
        } else if partial > allowed && partial > prohibited {
            SmokingPolicy::Partial
        } else {
            SmokingPolicy::Unknown
        }
    }
}

impl VenueRecord {
    /// A record with no data: zeroed accumulators stamped at `now`, policy unknown.
    pub fn reset(key: VenueKey, now: DateTime<Utc>) -> Self {
        Self {
            key,
            smoking_policy: SmokingPolicy::Unknown,
            air_quality_smokers: Score::UNDEFINED,
            air_quality_nonsmokers: Score::UNDEFINED,
            smoking_allowed: DecliningValuation::new(now),
            smoking_prohibited: DecliningValuation::new(now),
            partial_smoking_allowed: DecliningValuation::new(now),
            air_quality_calculation_smokers: BoundedDecliningValuation::new(now),
            air_quality_calculation_nonsmokers: BoundedDecliningValuation::new(now),
        }
    }

    pub fn key(&self) -> &VenueKey {
        &self.key
    }

    pub fn smoking_policy(&self) -> SmokingPolicy {
        self.smoking_policy
    }

    pub fn air_quality_smokers(&self) -> Score {
        self.air_quality_smokers
    }

    pub fn air_quality_nonsmokers(&self) -> Score {
        self.air_quality_nonsmokers
    }

    /// Vote counter for a votable policy; `None` for `Unknown`.
    pub fn counter(&self, policy: SmokingPolicy) -> Option<&DecliningValuation> {
        match policy {
            SmokingPolicy::Allowed => Some(&self.smoking_allowed),
            SmokingPolicy::Prohibited => Some(&self.smoking_prohibited),
            SmokingPolicy::Partial => Some(&self.partial_smoking_allowed),
            SmokingPolicy::Unknown => None,
        }
    }

    fn counter_mut(&mut self, policy: SmokingPolicy) -> Option<&mut DecliningValuation> {
        match policy {
            SmokingPolicy::Allowed => Some(&mut self.smoking_allowed),
            SmokingPolicy::Prohibited => Some(&mut self.smoking_prohibited),
            SmokingPolicy::Partial => Some(&mut self.partial_smoking_allowed),
            SmokingPolicy::Unknown => None,
        }
    }

    pub fn smokers_accumulator(&self) -> &BoundedDecliningValuation {
        &self.air_quality_calculation_smokers
    }

    pub fn nonsmokers_accumulator(&self) -> &BoundedDecliningValuation {
        &self.air_quality_calculation_nonsmokers
    }

    pub fn vote_tally(&self) -> VoteTally {
        VoteTally {
            allowed: self.smoking_allowed.value(),
            prohibited: self.smoking_prohibited.value(),
            partial: self.partial_smoking_allowed.value(),
        }
    }

    /// Age every accumulator to `now` at the default retention.
    pub fn depreciate_all(&mut self, now: DateTime<Utc>) -> usize {
        self.depreciate_all_with(now, DAILY_RETENTION)
    }

    /// Age every accumulator to `now`. Returns how many accumulators decayed.
    ///
    /// Derived fields are not recomputed; decay preserves every ratio and the
    /// ordering of the counters.
    pub fn depreciate_all_with(&mut self, now: DateTime<Utc>, daily_retention: f64) -> usize {
        [
            self.smoking_allowed.depreciate_with(now, daily_retention),
            self.smoking_prohibited.depreciate_with(now, daily_retention),
            self.partial_smoking_allowed
                .depreciate_with(now, daily_retention),
            self.air_quality_calculation_smokers
                .depreciate_all_with(now, daily_retention),
            self.air_quality_calculation_nonsmokers
                .depreciate_all_with(now, daily_retention),
        ]
        .into_iter()
        .filter(|decayed| *decayed)
        .count()
    }

    /// Fold a validated review in with unit weight.
    pub fn apply_review(&mut self, review: &Review) {
        self.apply_review_weighted(review, REVIEW_WEIGHT);
    }

    /// Fold a validated review in, each score counted with `weight`.
    pub fn apply_review_weighted(&mut self, review: &Review, weight: f64) {
        if let Some(score) = review.air_quality_nonsmokers {
            self.air_quality_calculation_nonsmokers
                .accumulate(score, weight);
            self.air_quality_nonsmokers =
                self.air_quality_calculation_nonsmokers.normalized_ratio().into();
        }
        if let Some(score) = review.air_quality_smokers {
            self.air_quality_calculation_smokers.accumulate(score, weight);
            self.air_quality_smokers =
                self.air_quality_calculation_smokers.normalized_ratio().into();
        }
        if let Some(policy) = review.smoking_policy {
            match self.counter_mut(policy) {
                Some(counter) => {
                    counter.increment(VOTE_WEIGHT);
                    self.smoking_policy = self.vote_tally().leader();
                }
                None => tracing::warn!(
                    venue = %self.key,
                    "ignoring vote for non-votable policy {policy}"
                ),
            }
        }
    }

    pub fn summary(&self) -> VenueSummary {
        VenueSummary {
            key: self.key.clone(),
            air_quality_smokers: self.air_quality_smokers,
            air_quality_nonsmokers: self.air_quality_nonsmokers,
            smoking_policy: self.smoking_policy,
        }
    }
}
