//! ReviewValidator: implements IReviewValidator with a configurable score range.

use venue_core::errors::{VenueError, VenueResult};
use venue_core::traits::IReviewValidator;
use venue_core::venue::{Review, SmokingPolicy};

/// Closed interval a specified air-quality score must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Stateless review validator. Build one and hand it to the ingestion engine.
#[derive(Debug, Clone, Default)]
pub struct ReviewValidator {
    range: ScoreRange,
}

impl ReviewValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(range: ScoreRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }

    fn score_ok(&self, score: Option<f64>) -> bool {
        score.map_or(true, |v| self.range.contains(v))
    }

    fn policy_ok(policy: Option<SmokingPolicy>) -> bool {
        policy.map_or(true, SmokingPolicy::is_votable)
    }

    /// First failing check, described.
    fn violation(&self, review: &Review) -> Option<String> {
        if !self.is_well_formed(review) {
            return Some("review specifies no fields".to_string());
        }
        if !self.score_ok(review.air_quality_smokers) {
            return Some(format!(
                "smokers score {:?} outside [{}, {}]",
                review.air_quality_smokers, self.range.min, self.range.max
            ));
        }
        if !self.score_ok(review.air_quality_nonsmokers) {
            return Some(format!(
                "non-smokers score {:?} outside [{}, {}]",
                review.air_quality_nonsmokers, self.range.min, self.range.max
            ));
        }
        if !Self::policy_ok(review.smoking_policy) {
            return Some("smoking policy vote must not be unknown".to_string());
        }
        None
    }
}

impl IReviewValidator for ReviewValidator {
    fn is_well_formed(&self, review: &Review) -> bool {
        !review.is_empty()
    }

    fn values_in_bounds(&self, review: &Review) -> bool {
        self.score_ok(review.air_quality_smokers)
            && self.score_ok(review.air_quality_nonsmokers)
            && Self::policy_ok(review.smoking_policy)
    }

    fn validate(&self, review: &Review) -> VenueResult<()> {
        match self.violation(review) {
            Some(reason) => Err(VenueError::InvalidReview { reason }),
            None => Ok(()),
        }
    }
}
