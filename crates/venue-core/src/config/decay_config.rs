use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Fraction of every valuation retained per elapsed calendar day.
    pub daily_retention: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            daily_retention: defaults::DEFAULT_DAILY_RETENTION,
        }
    }
}
