//! BoundedDecliningValuation: value and bound decayed together, read as a ratio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DAILY_RETENTION;

use super::declining::DecliningValuation;
use super::retention::retention_factor;

/// A declining valuation paired with a bound that declines at the same rate.
///
/// Each contribution adds `value * weight` to `value` and `weight` to `bound`,
/// so `value / bound` is a weighted running average. Decaying both by the same
/// factor leaves the ratio unchanged and only ages the evidence behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedDecliningValuation {
    #[serde(flatten)]
    valuation: DecliningValuation,
    bound: f64,
}

impl BoundedDecliningValuation {
    /// An empty accumulator (zero value, zero bound) stamped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            valuation: DecliningValuation::new(now),
            bound: 0.0,
        }
    }

    pub fn with_values(value: f64, bound: f64, changed: DateTime<Utc>) -> Self {
        Self {
            valuation: DecliningValuation::with_value(value, changed),
            bound,
        }
    }

    pub fn value(&self) -> f64 {
        self.valuation.value()
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn changed(&self) -> DateTime<Utc> {
        self.valuation.changed()
    }

    pub fn depreciate_all(&mut self, now: DateTime<Utc>) -> bool {
        self.depreciate_all_with(now, DAILY_RETENTION)
    }

    /// Decay value and bound by one shared factor. Same-day calls are no-ops.
    pub fn depreciate_all_with(&mut self, now: DateTime<Utc>, daily_retention: f64) -> bool {
        match retention_factor(self.valuation.changed(), now, daily_retention) {
            Some(factor) => {
                self.valuation.scale(factor, now);
                self.bound *= factor;
                true
            }
            None => false,
        }
    }

    /// Fold in one contribution of `value` carrying `weight`.
    pub fn accumulate(&mut self, value: f64, weight: f64) {
        self.valuation.increment(value * weight);
        self.bound += weight;
    }

    /// `value / bound`, or `None` while nothing has been accumulated.
    pub fn normalized_ratio(&self) -> Option<f64> {
        if self.bound == 0.0 {
            None
        } else {
            Some(self.valuation.value() / self.bound)
        }
    }
}
