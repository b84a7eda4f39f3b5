//! The verification pipeline.
//!
//! One linear pass per claim: normalize, consult the cache, retrieve,
//! score, select evidence, fuse, explain, assemble cards, persist. Only
//! an empty claim or an unavailable retrieval provider fail the request;
//! every other dependency degrades in place.

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use tracing::{info, warn};

use verity_cache::ClaimCache;
use verity_core::claim::Claim;
use verity_core::config::VerityConfig;
use verity_core::constants::CACHE_HIT_CONFIDENCE;
use verity_core::errors::{VerityError, VerityResult};
use verity_core::models::{
    CacheEntry, EvidenceBundle, EvidenceItem, SourceCard, Stance, VerificationResult, Verdict,
};
use verity_core::traits::{
    IContentExtractor, IScoringOracle, ISearchProvider, ITextRewriter, IVerdictCache,
};
use verity_evidence::EvidenceSelector;
use verity_oracle::OracleEngine;
use verity_retrieval::{PageExtractor, WebSearchProvider};

use crate::rewriter::create_rewriter;

/// The assembled fact-checking engine.
pub struct VerityEngine {
    search: Arc<dyn ISearchProvider>,
    selector: EvidenceSelector,
    oracle: Arc<OracleEngine>,
    rewriter: Arc<dyn ITextRewriter>,
    cache: Option<Arc<dyn IVerdictCache>>,
    config: VerityConfig,
}

impl VerityEngine {
    /// Assemble an engine from explicit parts.
    pub fn new(
        search: Arc<dyn ISearchProvider>,
        extractor: Arc<dyn IContentExtractor>,
        oracle: Arc<OracleEngine>,
        rewriter: Arc<dyn ITextRewriter>,
        cache: Option<Arc<dyn IVerdictCache>>,
        config: VerityConfig,
    ) -> Self {
        let scoring: Arc<dyn IScoringOracle> = oracle.clone();
        let selector = EvidenceSelector::new(extractor, scoring, config.evidence.clone());
        Self {
            search,
            selector,
            oracle,
            rewriter,
            cache,
            config,
        }
    }

    /// Assemble an engine with the standard providers.
    ///
    /// A cache that fails to open is logged and dropped; verification
    /// runs fresh every time rather than failing startup.
    pub fn from_config(config: VerityConfig) -> VerityResult<Self> {
        let search: Arc<dyn ISearchProvider> = Arc::new(WebSearchProvider::new(&config.search)?);
        let extractor: Arc<dyn IContentExtractor> =
            Arc::new(PageExtractor::new(&config.evidence)?);
        let oracle = Arc::new(OracleEngine::new(&config.oracle)?);
        let rewriter = create_rewriter(&config.rewriter)?;

        let cache: Option<Arc<dyn IVerdictCache>> = if config.cache.enabled {
            match ClaimCache::open(&config.cache) {
                Ok(cache) => Some(Arc::new(cache)),
                Err(e) => {
                    warn!(error = %e, "verdict cache unavailable, continuing without");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(search, extractor, oracle, rewriter, cache, config))
    }

    /// Verify a claim against the web.
    pub async fn verify(
        &self,
        claim_text: &str,
        max_results: usize,
    ) -> VerityResult<VerificationResult> {
        let started = Instant::now();

        // Step 1: normalize and validate the claim.
        let claim = Claim::new(claim_text);
        if claim.is_empty() {
            return Err(VerityError::EmptyClaim);
        }

        // Step 2: serve a prior verdict when one is cached.
        if let Some(entry) = self.cache_lookup(claim.normalized()) {
            info!(claim = claim.normalized(), "serving cached verdict");
            return Ok(cached_result(entry, started));
        }

        // Step 3: retrieve candidate sources. Provider failure is fatal
        // for the request; a verdict without sources would be fabricated.
        let results = self.search.search(claim.raw(), max_results).await?;

        // Step 4: coarse keyword heuristic over titles and snippets.
        let heuristic = verity_heuristic::score(&results, &self.config.heuristic);

        // Step 5: sentence-level evidence from the result pages.
        let links: Vec<String> = results
            .iter()
            .filter(|r| !r.url.is_empty())
            .map(|r| r.url.clone())
            .collect();
        let (entailing, contradicting) = self.selector.select(claim.raw(), &links).await;
        for event in self.oracle.drain_degradation_events() {
            warn!(
                component = %event.component,
                failure = %event.failure,
                fallback = %event.fallback_used,
                "degraded during verification"
            );
        }

        // Step 6: fuse the heuristic with the evidence counts and explain.
        let verdict = verity_verdict::fuse(heuristic.verdict, &entailing, &contradicting);
        let explanation =
            verity_verdict::build_explanation(claim.raw(), &entailing, &contradicting);
        let explanation = self.rewriter.rewrite(&explanation).await;
        let confidence = verity_verdict::confidence(verdict, entailing.len(), contradicting.len());

        // Step 7: per-source stance cards and the response evidence bundle.
        let buckets = verity_verdict::bucket_evidence(&results, &entailing, &contradicting);
        let sources = verity_verdict::build_source_cards(&results, &buckets);
        let evidence = EvidenceBundle {
            support: entailing.iter().map(EvidenceItem::from).collect(),
            refute: contradicting.iter().map(EvidenceItem::from).collect(),
        };

        // Step 8: record the verdict for the next identical claim.
        let top_link = results
            .first()
            .map(|r| r.url.as_str())
            .filter(|url| !url.is_empty())
            .unwrap_or("#");
        let payload = json!({
            "entailing": entailing,
            "contradicting": contradicting,
            "heuristic": heuristic,
        });
        self.cache_write(claim.normalized(), verdict, top_link, &explanation, &payload);

        info!(
            claim = claim.normalized(),
            verdict = verdict.as_str(),
            confidence,
            sources = sources.len(),
            "verification complete"
        );

        Ok(VerificationResult {
            verdict,
            confidence,
            explanation,
            sources,
            evidence,
            processing_time: elapsed_secs(started),
        })
    }

    /// Cache read; any failure is a miss.
    fn cache_lookup(&self, claim_norm: &str) -> Option<CacheEntry> {
        let cache = self.cache.as_ref()?;
        match cache.get(claim_norm) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Cache write; any failure only costs the next request a re-run.
    fn cache_write(
        &self,
        claim_norm: &str,
        verdict: Verdict,
        link: &str,
        explanation: &str,
        evidence: &serde_json::Value,
    ) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Err(e) = cache.upsert(claim_norm, verdict, link, explanation, evidence) {
            warn!(error = %e, "cache write failed, verdict not persisted");
        }
    }
}

/// Response shape for a cache hit: one synthetic card, no fresh evidence.
fn cached_result(entry: CacheEntry, started: Instant) -> VerificationResult {
    let url = entry
        .link
        .clone()
        .filter(|link| !link.is_empty())
        .unwrap_or_else(|| "#".to_string());
    VerificationResult {
        verdict: entry.verdict,
        confidence: CACHE_HIT_CONFIDENCE,
        explanation: entry
            .explanation
            .unwrap_or_else(|| "Cached result".to_string()),
        sources: vec![SourceCard {
            id: 1,
            title: "Database Cache".to_string(),
            url,
            organization: "Cached".to_string(),
            snippet: None,
            stance: Stance::Neutral,
            evidence_sentences: Vec::new(),
        }],
        evidence: EvidenceBundle::default(),
        processing_time: elapsed_secs(started),
    }
}

/// Wall-clock seconds rounded to milliseconds.
fn elapsed_secs(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 1000.0).round() / 1000.0
}
