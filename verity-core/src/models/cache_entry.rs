use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// A previously computed verdict read back from the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub verdict: Verdict,
    /// Top source link recorded with the verdict, if any.
    pub link: Option<String>,
    pub explanation: Option<String>,
    /// Full evidence payload as stored, for clients that want the detail.
    pub evidence: Option<serde_json::Value>,
    pub searched_at: DateTime<Utc>,
}
