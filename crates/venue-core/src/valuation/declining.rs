//! DecliningValuation: a single value aged by calendar day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DAILY_RETENTION;

use super::retention::retention_factor;

/// A value that loses a fixed fraction per elapsed calendar day.
///
/// `changed` only moves forward: it is replaced by `now` when decay applies
/// and left alone by increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecliningValuation {
    value: f64,
    changed: DateTime<Utc>,
}

impl DecliningValuation {
    /// A zero valuation stamped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_value(0.0, now)
    }

    pub fn with_value(value: f64, changed: DateTime<Utc>) -> Self {
        Self { value, changed }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn changed(&self) -> DateTime<Utc> {
        self.changed
    }

    /// Decay by [`DAILY_RETENTION`] per elapsed day. Returns whether anything changed.
    pub fn depreciate(&mut self, now: DateTime<Utc>) -> bool {
        self.depreciate_with(now, DAILY_RETENTION)
    }

    /// Decay by `daily_retention` per elapsed day. Same-day calls are no-ops.
    pub fn depreciate_with(&mut self, now: DateTime<Utc>, daily_retention: f64) -> bool {
        match retention_factor(self.changed, now, daily_retention) {
            Some(factor) => {
                self.scale(factor, now);
                true
            }
            None => false,
        }
    }

    /// Add `amount` without touching the timestamp.
    pub fn increment(&mut self, amount: f64) {
        self.value += amount;
    }

    pub(crate) fn scale(&mut self, factor: f64, now: DateTime<Utc>) {
        self.value *= factor;
        self.changed = now;
    }
}
