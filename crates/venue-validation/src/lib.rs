//! # venue-validation
//!
//! The gate a review passes before ingestion:
//! 1. **Well-formed**: at least one field is specified
//! 2. **In bounds**: specified scores lie in the configured closed range
//!    and a specified policy is a real vote, never `unknown`

pub mod validator;

pub use validator::{ReviewValidator, ScoreRange};
