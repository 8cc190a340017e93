//! The per-venue record and the values that flow in and out of it.

pub mod key;
pub mod policy;
pub mod record;
pub mod review;
pub mod score;
pub mod summary;

pub use key::VenueKey;
pub use policy::SmokingPolicy;
pub use record::{VenueRecord, VoteTally};
pub use review::{Review, ReviewForm};
pub use score::Score;
pub use summary::VenueSummary;
