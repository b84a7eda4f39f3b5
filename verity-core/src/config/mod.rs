//! Configuration for all Verity subsystems.
//!
//! Every section deserializes with `#[serde(default)]`, so a partial TOML
//! file (or an empty one) always yields a usable config. Secrets come in
//! through `apply_env`, never through the file.

pub mod defaults;

mod cache_config;
mod evidence_config;
mod heuristic_config;
mod oracle_config;
mod rewriter_config;
mod search_config;

pub use cache_config::CacheConfig;
pub use evidence_config::EvidenceConfig;
pub use heuristic_config::HeuristicConfig;
pub use oracle_config::OracleConfig;
pub use rewriter_config::RewriterConfig;
pub use search_config::SearchConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{VerityError, VerityResult};

/// Top-level configuration aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub search: SearchConfig,
    pub oracle: OracleConfig,
    pub evidence: EvidenceConfig,
    pub heuristic: HeuristicConfig,
    pub cache: CacheConfig,
    pub rewriter: RewriterConfig,
}

impl VerityConfig {
    /// Parse a TOML string. Missing sections and fields fall back to defaults.
    pub fn from_toml(input: &str) -> VerityResult<Self> {
        toml::from_str(input).map_err(|e| VerityError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a TOML config file from disk.
    pub fn load(path: &Path) -> VerityResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| VerityError::Config {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&raw)
    }

    /// Overlay environment variables on top of the file-based config.
    ///
    /// `API_KEY` and `SEARCH_ENGINE_ID` keep their legacy names; the rest
    /// use the `VERITY_` prefix.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("API_KEY") {
            if !key.is_empty() {
                self.search.api_key = Some(key);
            }
        }
        if let Ok(id) = std::env::var("SEARCH_ENGINE_ID") {
            if !id.is_empty() {
                self.search.engine_id = Some(id);
            }
        }
        if let Ok(url) = std::env::var("ORACLE_URL") {
            if !url.is_empty() {
                self.oracle.endpoint = Some(url);
            }
        }
        if let Ok(url) = std::env::var("REWRITER_URL") {
            if !url.is_empty() {
                self.rewriter.endpoint = Some(url);
            }
        }
        if let Ok(path) = std::env::var("VERITY_DB") {
            if !path.is_empty() {
                self.cache.path = path;
            }
        }
    }
}
