//! Calendar-day elapsed time and the retention factor derived from it.

use chrono::{DateTime, Utc};

use crate::constants::DECAY_DAY_THRESHOLD;

/// Whole UTC calendar days from `last_changed` to `now`.
///
/// Both timestamps are truncated to their day before differencing, so
/// 23:59 → 00:01 counts as one day and 00:01 → 23:59 counts as zero.
/// Negative when `now` precedes `last_changed`.
pub fn elapsed_days(last_changed: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - last_changed.date_naive()).num_days()
}

/// Multiplicative decay factor for the elapsed days: `retention^days`.
///
/// Returns `None` when fewer than [`DECAY_DAY_THRESHOLD`] days elapsed
/// (same day, or `now` in the past), meaning "leave untouched".
pub fn retention_factor(
    last_changed: DateTime<Utc>,
    now: DateTime<Utc>,
    daily_retention: f64,
) -> Option<f64> {
    let days = elapsed_days(last_changed, now) as f64;
    if days < DECAY_DAY_THRESHOLD {
        return None;
    }
    Some(daily_retention.powf(days))
}
