mod storage;
mod validator;

pub use storage::{IVenueStore, StoredVenue};
pub use validator::IReviewValidator;
