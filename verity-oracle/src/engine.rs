//! OracleEngine, the main entry point for verity-oracle.
//!
//! Coordinates provider selection, the degradation chain, and the
//! embedding cache. Implements `IScoringOracle` so the evidence selector
//! can use it anywhere a provider is expected.

use async_trait::async_trait;
use tracing::{debug, info};

use verity_core::config::OracleConfig;
use verity_core::errors::VerityResult;
use verity_core::models::{DegradationEvent, EntailmentJudgment};
use verity_core::traits::IScoringOracle;

use crate::degradation::DegradationChain;
use crate::embed_cache::EmbedCache;
use crate::providers;

/// The main scoring engine.
///
/// The chain holds the configured primary provider and, only when the
/// operator opted in, the lexical fallback. An unavailable chain is a
/// visible state the selector checks before doing any work, so an outage
/// degrades to empty evidence instead of invented scores.
pub struct OracleEngine {
    chain: DegradationChain,
    cache: EmbedCache,
    dimensions: usize,
}

impl OracleEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &OracleConfig) -> VerityResult<Self> {
        let mut chain = DegradationChain::new();
        chain.push(providers::create_provider(config)?);

        if config.fallback == "lexical" && config.provider != "lexical" {
            chain.push(Box::new(providers::LexicalOracle::new(config.dimensions)));
        }

        let cache = EmbedCache::new(config.embed_cache_size);

        info!(
            provider = chain.active_provider_name(),
            fallbacks = chain.len().saturating_sub(1),
            dims = config.dimensions,
            "OracleEngine initialized"
        );

        Ok(Self {
            chain,
            cache,
            dimensions: config.dimensions,
        })
    }

    /// Embed texts, serving repeats from the cache.
    ///
    /// Only cache misses go to the provider; results merge back in input
    /// order.
    async fn embed_cached(&self, texts: &[String]) -> VerityResult<Vec<Vec<f32>>> {
        let keys: Vec<String> = texts.iter().map(|t| EmbedCache::key(t)).collect();

        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();
        let miss_indices: Vec<usize> = out
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_none().then_some(i))
            .collect();

        if miss_indices.is_empty() {
            debug!(count = texts.len(), "embed batch fully cached");
            return Ok(out.into_iter().flatten().collect());
        }

        let misses: Vec<String> = miss_indices.iter().map(|&i| texts[i].clone()).collect();
        let (fresh, provider) = self.chain.embed_batch(&misses).await?;
        debug!(
            provider,
            cached = texts.len() - miss_indices.len(),
            embedded = miss_indices.len(),
            "embed batch complete"
        );

        for (&i, vector) in miss_indices.iter().zip(fresh) {
            self.cache.insert(keys[i].clone(), vector.clone());
            out[i] = Some(vector);
        }

        Ok(out.into_iter().flatten().collect())
    }

    /// Name of the provider currently serving requests.
    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    /// Drain degradation events accumulated since the last drain.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    /// Number of embedding vectors currently cached.
    pub fn cached_embeddings(&self) -> u64 {
        self.cache.len()
    }
}

#[async_trait]
impl IScoringOracle for OracleEngine {
    async fn embed_batch(&self, texts: &[String]) -> VerityResult<Vec<Vec<f32>>> {
        self.embed_cached(texts).await
    }

    async fn classify_batch(
        &self,
        claim: &str,
        sentences: &[String],
    ) -> VerityResult<Vec<EntailmentJudgment>> {
        let (judgments, _provider) = self.chain.classify_batch(claim, sentences).await?;
        Ok(judgments)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "oracle-engine"
    }

    fn is_available(&self) -> bool {
        self.chain.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexical_config() -> OracleConfig {
        OracleConfig {
            provider: "lexical".to_string(),
            ..OracleConfig::default()
        }
    }

    #[test]
    fn remote_without_endpoint_is_unavailable() {
        let engine = OracleEngine::new(&OracleConfig::default()).unwrap();
        assert!(!engine.is_available());
        assert_eq!(engine.active_provider(), "none");
    }

    #[test]
    fn lexical_primary_is_available() {
        let engine = OracleEngine::new(&lexical_config()).unwrap();
        assert!(engine.is_available());
        assert_eq!(engine.active_provider(), "lexical-oracle");
    }

    #[test]
    fn lexical_fallback_joins_chain_when_opted_in() {
        let config = OracleConfig {
            fallback: "lexical".to_string(),
            ..OracleConfig::default()
        };
        let engine = OracleEngine::new(&config).unwrap();
        // Remote primary has no endpoint, so the fallback is active.
        assert!(engine.is_available());
        assert_eq!(engine.active_provider(), "lexical-oracle");
    }

    #[tokio::test]
    async fn repeat_embeds_hit_the_cache() {
        let engine = OracleEngine::new(&lexical_config()).unwrap();
        let texts = vec!["water boils at 100 degrees".to_string()];

        let first = engine.embed_batch(&texts).await.unwrap();
        assert_eq!(engine.cached_embeddings(), 1);

        let second = engine.embed_batch(&texts).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn mixed_batch_merges_cache_and_fresh_in_order() {
        let engine = OracleEngine::new(&lexical_config()).unwrap();
        let first = engine
            .embed_batch(&["alpha beta".to_string()])
            .await
            .unwrap();

        let batch = engine
            .embed_batch(&["gamma delta".to_string(), "alpha beta".to_string()])
            .await
            .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1], first[0]);
    }
}
