//! In-memory embedding cache using moka.
//!
//! Keyed by blake3 content hash. The claim vector is the hot entry: one
//! verification embeds the claim once per fetched page, and repeat
//! verifications of related claims reuse sentence vectors too.

use std::time::Duration;

use moka::sync::Cache;

/// L1 embedding cache with TinyLFU admission and per-entry TTL.
pub struct EmbedCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbedCache {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
            .time_to_live(Duration::from_secs(86400)) // 24 hour max TTL
            .build();

        Self { cache }
    }

    /// Content hash used as the cache key.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    /// Get a vector by content hash.
    pub fn get(&self, content_hash: &str) -> Option<Vec<f32>> {
        self.cache.get(content_hash)
    }

    /// Insert a vector keyed by content hash.
    pub fn insert(&self, content_hash: String, vector: Vec<f32>) {
        self.cache.insert(content_hash, vector);
    }

    /// Number of entries currently cached.
    ///
    /// Flushes pending maintenance first so the count reflects recent
    /// inserts.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = EmbedCache::new(100);
        let key = EmbedCache::key("the claim");
        let vec = vec![1.0, 2.0, 3.0];
        cache.insert(key.clone(), vec.clone());
        assert_eq!(cache.get(&key), Some(vec));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbedCache::new(100);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn keys_are_stable_per_text() {
        assert_eq!(EmbedCache::key("same text"), EmbedCache::key("same text"));
        assert_ne!(EmbedCache::key("one"), EmbedCache::key("two"));
    }
}
