//! In-memory L1 in front of the SQLite store.
//!
//! Keyed by normalized claim text. No expiry: the store rows never
//! expire either, so a cached entry only goes stale when this process
//! overwrites it, and upsert refreshes the L1 in the same call.

use moka::sync::Cache;

use verity_core::models::CacheEntry;

/// Process-local verdict cache with TinyLFU admission.
pub struct L1EntryCache {
    cache: Cache<String, CacheEntry>,
}

impl L1EntryCache {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, claim_norm: &str) -> Option<CacheEntry> {
        self.cache.get(claim_norm)
    }

    pub fn insert(&self, claim_norm: String, entry: CacheEntry) {
        self.cache.insert(claim_norm, entry);
    }

    /// Number of entries currently cached.
    ///
    /// Flushes pending maintenance first so the count reflects recent
    /// inserts.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use verity_core::models::Verdict;

    fn entry(verdict: Verdict) -> CacheEntry {
        CacheEntry {
            verdict,
            link: Some("https://example.org".to_string()),
            explanation: Some("text".to_string()),
            evidence: None,
            searched_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_get() {
        let cache = L1EntryCache::new(10);
        cache.insert("the claim".to_string(), entry(Verdict::True));
        assert_eq!(cache.get("the claim").map(|e| e.verdict), Some(Verdict::True));
    }

    #[test]
    fn miss_returns_none() {
        let cache = L1EntryCache::new(10);
        assert!(cache.get("never seen").is_none());
    }

    #[test]
    fn insert_overwrites_in_place() {
        let cache = L1EntryCache::new(10);
        cache.insert("the claim".to_string(), entry(Verdict::True));
        cache.insert("the claim".to_string(), entry(Verdict::False));
        assert_eq!(cache.get("the claim").map(|e| e.verdict), Some(Verdict::False));
        assert_eq!(cache.len(), 1);
    }
}
