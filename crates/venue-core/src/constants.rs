/// Fraction of a valuation that survives one calendar day.
pub const DAILY_RETENTION: f64 = 0.99;

/// Elapsed whole days below this are treated as "same day" and never decay.
pub const DECAY_DAY_THRESHOLD: f64 = 0.5;

/// Weight added to an air-quality bound per submitted score.
pub const REVIEW_WEIGHT: f64 = 1.0;

/// Amount added to a smoking-policy counter per vote.
pub const VOTE_WEIGHT: f64 = 1.0;

/// Allowed venue key alphabet (Google Places ids).
pub const VENUE_KEY_PATTERN: &str = "^[a-zA-Z0-9-]+$";
