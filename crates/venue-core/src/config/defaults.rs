use crate::constants;

pub const DEFAULT_DAILY_RETENTION: f64 = constants::DAILY_RETENTION;

pub const DEFAULT_MAX_CONFLICT_RETRIES: u32 = 3;
pub const DEFAULT_REVIEW_WEIGHT: f64 = constants::REVIEW_WEIGHT;

pub const DEFAULT_DB_PATH: &str = "venues.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_WAL_MODE: bool = true;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
