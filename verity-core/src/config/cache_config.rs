use serde::{Deserialize, Serialize};

use super::defaults;

/// Verdict-cache subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Disable to run every verification fresh.
    pub enabled: bool,
    /// SQLite database path (`VERITY_DB` env var overrides).
    pub path: String,
    /// L1 in-memory cache capacity (entries).
    pub l1_size: u64,
    /// SQLite busy timeout.
    pub busy_timeout_ms: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CACHE_ENABLED,
            path: defaults::DEFAULT_CACHE_DB_FILENAME.to_string(),
            l1_size: defaults::DEFAULT_CACHE_L1_SIZE,
            busy_timeout_ms: defaults::DEFAULT_CACHE_BUSY_TIMEOUT_MS,
        }
    }
}
