use serde::{Deserialize, Serialize};

use super::defaults;

/// Explanation-rewriter subsystem configuration.
///
/// With no endpoint configured the engine uses the no-op rewriter and
/// explanations go out exactly as the templates built them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Base URL of the rewriting service (`REWRITER_URL` env var overrides).
    pub endpoint: Option<String>,
    /// HTTP timeout for rewrite requests.
    pub timeout_secs: u64,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: defaults::DEFAULT_REWRITER_TIMEOUT_SECS,
        }
    }
}
