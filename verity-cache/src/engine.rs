//! Read-through cache engine implementing the verdict-cache seam.

use chrono::Utc;
use tracing::debug;

use verity_core::config::CacheConfig;
use verity_core::errors::VerityResult;
use verity_core::models::{CacheEntry, Verdict};
use verity_core::traits::IVerdictCache;

use crate::l1::L1EntryCache;
use crate::store::SqliteStore;

/// L1-fronted SQLite verdict cache.
pub struct ClaimCache {
    l1: L1EntryCache,
    store: SqliteStore,
}

impl ClaimCache {
    /// Open the cache at the configured path.
    pub fn open(config: &CacheConfig) -> VerityResult<Self> {
        Ok(Self {
            l1: L1EntryCache::new(config.l1_size),
            store: SqliteStore::open(config)?,
        })
    }

    /// Open a private in-memory cache, used in tests.
    pub fn open_in_memory(l1_size: u64) -> VerityResult<Self> {
        Ok(Self {
            l1: L1EntryCache::new(l1_size),
            store: SqliteStore::open_in_memory()?,
        })
    }
}

impl IVerdictCache for ClaimCache {
    fn get(&self, claim_norm: &str) -> VerityResult<Option<CacheEntry>> {
        if let Some(entry) = self.l1.get(claim_norm) {
            debug!(claim = claim_norm, "verdict cache hit (l1)");
            return Ok(Some(entry));
        }
        let entry = self.store.get(claim_norm)?;
        if let Some(found) = &entry {
            self.l1.insert(claim_norm.to_string(), found.clone());
            debug!(claim = claim_norm, "verdict cache hit (store)");
        }
        Ok(entry)
    }

    fn upsert(
        &self,
        claim_norm: &str,
        verdict: Verdict,
        link: &str,
        explanation: &str,
        evidence: &serde_json::Value,
    ) -> VerityResult<()> {
        // Store first: the L1 must never hold an entry the store lost.
        self.store
            .upsert(claim_norm, verdict, link, explanation, evidence)?;
        self.l1.insert(
            claim_norm.to_string(),
            CacheEntry {
                verdict,
                link: Some(link.to_string()),
                explanation: Some(explanation.to_string()),
                evidence: Some(evidence.clone()),
                searched_at: Utc::now(),
            },
        );
        Ok(())
    }
}
