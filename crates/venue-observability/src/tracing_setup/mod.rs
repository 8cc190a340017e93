//! Global subscriber installation driven by [`ObservabilityConfig`].

pub mod spans;

use tracing_subscriber::EnvFilter;

use venue_core::config::ObservabilityConfig;
use venue_core::errors::{VenueError, VenueResult};

/// Build the filter: `RUST_LOG` wins, otherwise `config.log_filter`.
pub fn env_filter(config: &ObservabilityConfig) -> VenueResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| VenueError::ConfigError(format!("invalid log filter: {e}"))),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> VenueResult<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| VenueError::ConfigError(format!("tracing already initialized: {e}")))
}
