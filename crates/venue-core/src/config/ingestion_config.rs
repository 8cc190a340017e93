use serde::{Deserialize, Serialize};

use super::defaults;

/// Review ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Extra load → ingest → store attempts after a version conflict.
    pub max_conflict_retries: u32,
    /// Weight added to an air-quality bound per submitted score.
    pub review_weight: f64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            max_conflict_retries: defaults::DEFAULT_MAX_CONFLICT_RETRIES,
            review_weight: defaults::DEFAULT_REVIEW_WEIGHT,
        }
    }
}
