//! Review input and the web form it arrives in.

use serde::{Deserialize, Serialize};

use crate::errors::{VenueError, VenueResult};

use super::{SmokingPolicy, VenueKey};

/// One reviewer's submission. `None` means the field was not specified.
///
/// Reviews are transient: ingestion folds them into a [`super::VenueRecord`]
/// and drops them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    pub smoking_policy: Option<SmokingPolicy>,
    pub air_quality_smokers: Option<f64>,
    pub air_quality_nonsmokers: Option<f64>,
}

impl Review {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: SmokingPolicy) -> Self {
        self.smoking_policy = Some(policy);
        self
    }

    pub fn with_smokers(mut self, score: f64) -> Self {
        self.air_quality_smokers = Some(score);
        self
    }

    pub fn with_nonsmokers(mut self, score: f64) -> Self {
        self.air_quality_nonsmokers = Some(score);
        self
    }

    /// True when no field is specified.
    pub fn is_empty(&self) -> bool {
        self.smoking_policy.is_none()
            && self.air_quality_smokers.is_none()
            && self.air_quality_nonsmokers.is_none()
    }
}

/// Review body as posted by the web client: every field present, with a
/// `...Specified` flag saying whether it counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReviewForm {
    pub google_maps_id: String,
    pub smoking_policy: i64,
    pub smoking_policy_specified: bool,
    pub air_quality_smokers: f64,
    pub air_quality_smokers_specified: bool,
    pub air_quality_nonsmokers: f64,
    pub air_quality_nonsmokers_specified: bool,
}

impl ReviewForm {
    /// Split into the target key and the review, dropping unspecified fields.
    pub fn into_parts(self) -> VenueResult<(VenueKey, Review)> {
        let key = VenueKey::parse(self.google_maps_id)?;
        let smoking_policy = if self.smoking_policy_specified {
            let policy = SmokingPolicy::from_code(self.smoking_policy).ok_or_else(|| {
                VenueError::InvalidReview {
                    reason: format!("unrecognised smoking policy code {}", self.smoking_policy),
                }
            })?;
            Some(policy)
        } else {
            None
        };
        let review = Review {
            smoking_policy,
            air_quality_smokers: self
                .air_quality_smokers_specified
                .then_some(self.air_quality_smokers),
            air_quality_nonsmokers: self
                .air_quality_nonsmokers_specified
                .then_some(self.air_quality_nonsmokers),
        };
        Ok((key, review))
    }
}
