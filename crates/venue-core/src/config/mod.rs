//! Workspace configuration, loaded from TOML with per-section defaults.

pub mod decay_config;
pub mod defaults;
pub mod ingestion_config;
pub mod observability_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

use crate::errors::{VenueError, VenueResult};

pub use decay_config::DecayConfig;
pub use ingestion_config::IngestionConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

/// Root configuration. Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    pub decay: DecayConfig,
    pub ingestion: IngestionConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl VenueConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> VenueResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| VenueError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> VenueResult<()> {
        let retention = self.decay.daily_retention;
        if !(retention > 0.0 && retention <= 1.0) {
            return Err(VenueError::ConfigError(format!(
                "decay.daily_retention must be in (0, 1], got {retention}"
            )));
        }
        let weight = self.ingestion.review_weight;
        if !(weight.is_finite() && weight > 0.0) {
            return Err(VenueError::ConfigError(format!(
                "ingestion.review_weight must be positive, got {weight}"
            )));
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(VenueError::ConfigError(
                "storage.db_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
