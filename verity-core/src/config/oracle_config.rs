use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring-oracle subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Primary provider: "remote" or "lexical".
    pub provider: String,
    /// Degradation fallback: "none" or "lexical".
    ///
    /// "none" is the default on purpose. When the oracle is down the
    /// selector must return empty evidence rather than scores invented
    /// by a weaker provider the operator never opted into.
    pub fallback: String,
    /// Base URL of the remote inference service (`ORACLE_URL` env var overrides).
    pub endpoint: Option<String>,
    /// HTTP timeout for inference requests.
    pub timeout_secs: u64,
    /// Embedding dimensionality.
    pub dimensions: usize,
    /// L1 embedding cache capacity (entries).
    pub embed_cache_size: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_ORACLE_PROVIDER.to_string(),
            fallback: defaults::DEFAULT_ORACLE_FALLBACK.to_string(),
            endpoint: None,
            timeout_secs: defaults::DEFAULT_ORACLE_TIMEOUT_SECS,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            embed_cache_size: defaults::DEFAULT_EMBED_CACHE_SIZE,
        }
    }
}
