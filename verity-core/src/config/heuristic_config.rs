use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword-heuristic subsystem configuration.
///
/// The keyword and source-weight tables themselves are compiled in; only
/// the decision ratio is tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// One side must outscore the other by this factor to win.
    pub decisive_ratio: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            decisive_ratio: defaults::DEFAULT_DECISIVE_RATIO,
        }
    }
}
