//! Fallback chain for oracle providers.
//!
//! Chain: remote inference → optional lexical fallback → error.
//! Every fallback is recorded as a degradation event.

use std::sync::Mutex;

use chrono::Utc;
use tracing::warn;

use verity_core::errors::{OracleError, VerityResult};
use verity_core::models::{DegradationEvent, EntailmentJudgment};
use verity_core::traits::IScoringOracle;

/// A provider entry in the fallback chain.
struct ChainEntry {
    provider: Box<dyn IScoringOracle>,
}

/// Tries providers in order. On failure, records a degradation event and
/// moves to the next provider.
///
/// Events sit behind a mutex so calls can run from `&self`; a poisoned
/// lock loses events but never the verdict.
pub struct DegradationChain {
    chain: Vec<ChainEntry>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationChain {
    /// Create an empty chain; providers join in priority order.
    pub fn new() -> Self {
        Self {
            chain: Vec::new(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IScoringOracle>) {
        self.chain.push(ChainEntry { provider });
    }

    /// Embed a batch via the first provider that succeeds.
    pub async fn embed_batch(&self, texts: &[String]) -> VerityResult<(Vec<Vec<f32>>, &str)> {
        let mut last_error = None;

        for (i, entry) in self.chain.iter().enumerate() {
            if !entry.provider.is_available() {
                continue;
            }

            match entry.provider.embed_batch(texts).await {
                Ok(vecs) => {
                    if i > 0 {
                        self.record_fallback(entry.provider.name());
                    }
                    return Ok((vecs, entry.provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = entry.provider.name(),
                        error = %e,
                        "batch embed failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(self.exhausted(last_error))
    }

    /// Classify a batch of sentences via the first provider that succeeds.
    pub async fn classify_batch(
        &self,
        claim: &str,
        sentences: &[String],
    ) -> VerityResult<(Vec<EntailmentJudgment>, &str)> {
        let mut last_error = None;

        for (i, entry) in self.chain.iter().enumerate() {
            if !entry.provider.is_available() {
                continue;
            }

            match entry.provider.classify_batch(claim, sentences).await {
                Ok(judgments) => {
                    if i > 0 {
                        self.record_fallback(entry.provider.name());
                    }
                    return Ok((judgments, entry.provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = entry.provider.name(),
                        error = %e,
                        "classification failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(self.exhausted(last_error))
    }

    fn record_fallback(&self, fallback_name: &str) {
        let primary_name = self
            .chain
            .first()
            .map(|e| e.provider.name())
            .unwrap_or("unknown");
        if let Ok(mut events) = self.events.lock() {
            events.push(DegradationEvent {
                component: "oracle".to_string(),
                failure: format!("{primary_name} unavailable"),
                fallback_used: fallback_name.to_string(),
                timestamp: Utc::now(),
            });
        }
    }

    fn exhausted(&self, last_error: Option<verity_core::VerityError>) -> verity_core::VerityError {
        match last_error {
            Some(e) => OracleError::AllProvidersFailed {
                last_error: e.to_string(),
            }
            .into(),
            None => OracleError::ProviderUnavailable {
                provider: format!("all {} providers unavailable", self.chain.len()),
            }
            .into(),
        }
    }

    /// Name of the first available provider, or "none".
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|e| e.provider.is_available())
            .map(|e| e.provider.name())
            .unwrap_or("none")
    }

    /// Whether any provider in the chain can serve requests.
    pub fn is_available(&self) -> bool {
        self.chain.iter().any(|e| e.provider.is_available())
    }

    /// Largest dimensionality declared by an available provider.
    pub fn dimensions(&self) -> usize {
        self.chain
            .iter()
            .find(|e| e.provider.is_available())
            .map(|e| e.provider.dimensions())
            .unwrap_or(0)
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
