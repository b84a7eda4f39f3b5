use serde::{Deserialize, Serialize};

use super::defaults;

/// Web-search subsystem configuration.
///
/// Credentials are deliberately optional here: a missing key is a runtime
/// dependency failure at search time, not a config parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search API endpoint.
    pub endpoint: String,
    /// API key (`API_KEY` env var overrides).
    pub api_key: Option<String>,
    /// Search engine identifier (`SEARCH_ENGINE_ID` env var overrides).
    pub engine_id: Option<String>,
    /// Default number of results per query, clamped to the provider cap.
    pub max_results: usize,
    /// HTTP timeout for search requests.
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_SEARCH_ENDPOINT.to_string(),
            api_key: None,
            engine_id: None,
            max_results: defaults::DEFAULT_MAX_RESULTS,
            timeout_secs: defaults::DEFAULT_SEARCH_TIMEOUT_SECS,
        }
    }
}
