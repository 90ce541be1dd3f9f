//! Engine configuration.
//!
//! The `[scheduling]` section of `repository.toml` tunes the scheduling
//! engine without code changes. All fields have defaults, so the section
//! (and the file) may be omitted entirely.

use serde::{Deserialize, Serialize};

/// Scheduling engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Children younger than this are excluded from rosters.
    #[serde(default = "default_min_child_age")]
    pub min_child_age: u32,
    /// Retry attempts for transient persistence failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries; doubles on each attempt.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Default rolling-statistics window in weeks.
    #[serde(default = "default_statistics_weeks")]
    pub statistics_weeks: u32,
}

fn default_min_child_age() -> u32 {
    12
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}

fn default_statistics_weeks() -> u32 {
    4
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            min_child_age: default_min_child_age(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            statistics_weeks: default_statistics_weeks(),
        }
    }
}
