use crate::errors::{VenueError, VenueResult};
use crate::venue::Review;

/// Gate every review must pass before it may touch a record.
pub trait IReviewValidator: Send + Sync {
    /// At least one field is specified.
    fn is_well_formed(&self, review: &Review) -> bool;

    /// Every specified value is in range and any policy is votable.
    fn values_in_bounds(&self, review: &Review) -> bool;

    fn validate(&self, review: &Review) -> VenueResult<()> {
        if !self.is_well_formed(review) {
            return Err(VenueError::InvalidReview {
                reason: "review specifies no fields".to_string(),
            });
        }
        if !self.values_in_bounds(review) {
            return Err(VenueError::InvalidReview {
                reason: "review values out of bounds".to_string(),
            });
        }
        Ok(())
    }
}
