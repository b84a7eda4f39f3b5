//! Evidence selection across search results.
//!
//! For each result URL: fetch and clean the page, segment it, rank
//! sentences by similarity to the claim, classify the top candidates,
//! and keep the ones past the polarity thresholds. Pages fan out
//! concurrently; the merged pools sort by (score, similarity) and cap at
//! the configured sizes.

use std::cmp::Ordering;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use verity_core::config::EvidenceConfig;
use verity_core::models::{EvidenceRecord, Polarity};
use verity_core::traits::{IContentExtractor, IScoringOracle};

use crate::segment;
use crate::similarity;

/// Claim-versus-page evidence selector.
pub struct EvidenceSelector {
    extractor: Arc<dyn IContentExtractor>,
    oracle: Arc<dyn IScoringOracle>,
    config: EvidenceConfig,
}

impl EvidenceSelector {
    pub fn new(
        extractor: Arc<dyn IContentExtractor>,
        oracle: Arc<dyn IScoringOracle>,
        config: EvidenceConfig,
    ) -> Self {
        Self {
            extractor,
            oracle,
            config,
        }
    }

    /// Select supporting and contradicting evidence for a claim.
    ///
    /// Per-page failures degrade silently to that page's exclusion. An
    /// unavailable oracle degrades all the way to empty pools, which the
    /// fuser reads as "no evidence signal" rather than as refutation.
    pub async fn select(
        &self,
        claim: &str,
        urls: &[String],
    ) -> (Vec<EvidenceRecord>, Vec<EvidenceRecord>) {
        if !self.oracle.is_available() {
            warn!("scoring oracle unavailable, returning empty evidence");
            return (Vec::new(), Vec::new());
        }
        if urls.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let tasks = urls
            .iter()
            .take(self.config.max_urls)
            .map(|url| self.collect_from_url(claim, url));
        let per_url = join_all(tasks).await;

        let mut entailing = Vec::new();
        let mut contradicting = Vec::new();
        for (support, refute) in per_url {
            entailing.extend(support);
            contradicting.extend(refute);
        }

        sort_evidence(&mut entailing);
        sort_evidence(&mut contradicting);
        entailing.truncate(self.config.max_entailing);
        contradicting.truncate(self.config.max_contradicting);

        debug!(
            entailing = entailing.len(),
            contradicting = contradicting.len(),
            "evidence selected"
        );
        (entailing, contradicting)
    }

    /// Run the per-page pipeline for one URL.
    async fn collect_from_url(
        &self,
        claim: &str,
        url: &str,
    ) -> (Vec<EvidenceRecord>, Vec<EvidenceRecord>) {
        let empty = (Vec::new(), Vec::new());

        let text = self.extractor.fetch_and_clean(url).await;
        if text.chars().count() < self.config.min_content_chars {
            debug!(url, "page skipped, too little content");
            return empty;
        }

        let sentences = segment::sentences(&text, &self.config);
        if sentences.is_empty() {
            return empty;
        }

        let Some(claim_vec) = self.embed_claim(claim, url).await else {
            return empty;
        };
        let sentence_vecs = match self.oracle.embed_batch(&sentences).await {
            Ok(vecs) => vecs,
            Err(e) => {
                warn!(url, error = %e, "sentence embedding failed");
                return empty;
            }
        };

        let ranked = similarity::rank_by_similarity(
            &claim_vec,
            sentences,
            &sentence_vecs,
            self.config.per_url_candidates,
        );

        let candidates: Vec<String> = ranked.iter().map(|(s, _)| s.clone()).collect();
        let judgments = match self.oracle.classify_batch(claim, &candidates).await {
            Ok(judgments) => judgments,
            Err(e) => {
                warn!(url, error = %e, "entailment scoring failed");
                return empty;
            }
        };

        let mut support = Vec::new();
        let mut refute = Vec::new();
        for ((sentence, sim), judgment) in ranked.into_iter().zip(judgments) {
            match judgment.polarity {
                Polarity::Entail if judgment.score >= self.config.entail_threshold => {
                    support.push(EvidenceRecord {
                        url: url.to_string(),
                        sentence,
                        similarity: sim,
                        score: judgment.score,
                        polarity: Polarity::Entail,
                    });
                }
                Polarity::Contradict if judgment.score >= self.config.contra_threshold => {
                    refute.push(EvidenceRecord {
                        url: url.to_string(),
                        sentence,
                        similarity: sim,
                        score: judgment.score,
                        polarity: Polarity::Contradict,
                    });
                }
                _ => {}
            }
        }
        (support, refute)
    }

    async fn embed_claim(&self, claim: &str, url: &str) -> Option<Vec<f32>> {
        let texts = [claim.to_string()];
        match self.oracle.embed_batch(&texts).await {
            Ok(mut vecs) if !vecs.is_empty() => Some(vecs.remove(0)),
            Ok(_) => None,
            Err(e) => {
                warn!(url, error = %e, "claim embedding failed");
                None
            }
        }
    }
}

/// Descending by entailment score, similarity as the tiebreak.
fn sort_evidence(records: &mut [EvidenceRecord]) {
    records.sort_by(|a, b| {
        (b.score, b.similarity)
            .partial_cmp(&(a.score, a.similarity))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use verity_core::errors::{OracleError, VerityResult};
    use verity_core::models::EntailmentJudgment;

    struct MockExtractor {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl IContentExtractor for MockExtractor {
        async fn fetch_and_clean(&self, url: &str) -> String {
            self.pages.get(url).cloned().unwrap_or_default()
        }
    }

    /// Scores by marker words in the sentence text, deterministically.
    struct MockOracle {
        available: bool,
    }

    #[async_trait]
    impl IScoringOracle for MockOracle {
        async fn embed_batch(&self, texts: &[String]) -> VerityResult<Vec<Vec<f32>>> {
            if !self.available {
                return Err(OracleError::ProviderUnavailable {
                    provider: "mock".to_string(),
                }
                .into());
            }
            Ok(texts
                .iter()
                .map(|t| {
                    if t.contains("distant") {
                        vec![0.0]
                    } else {
                        vec![1.0]
                    }
                })
                .collect())
        }

        async fn classify_batch(
            &self,
            _claim: &str,
            sentences: &[String],
        ) -> VerityResult<Vec<EntailmentJudgment>> {
            Ok(sentences
                .iter()
                .map(|s| {
                    if s.contains("supports-high") {
                        EntailmentJudgment {
                            polarity: Polarity::Entail,
                            score: 0.95,
                        }
                    } else if s.contains("weak-support") {
                        EntailmentJudgment {
                            polarity: Polarity::Entail,
                            score: 0.5,
                        }
                    } else if s.contains("supports") {
                        EntailmentJudgment {
                            polarity: Polarity::Entail,
                            score: 0.8,
                        }
                    } else if s.contains("denies") {
                        EntailmentJudgment {
                            polarity: Polarity::Contradict,
                            score: 0.9,
                        }
                    } else {
                        EntailmentJudgment {
                            polarity: Polarity::Neutral,
                            score: 0.9,
                        }
                    }
                })
                .collect())
        }

        fn dimensions(&self) -> usize {
            1
        }
        fn name(&self) -> &str {
            "mock-oracle"
        }
        fn is_available(&self) -> bool {
            self.available
        }
    }

    const S_SUPPORT: &str =
        "The published review plainly supports the central claim under test here.";
    const S_SUPPORT_2: &str =
        "Independent auditors say the data supports the central claim once again.";
    const S_SUPPORT_HI: &str =
        "A federal agency supports-high the central claim in a formal statement.";
    const S_DENY: &str = "A rival laboratory denies the central claim in its latest bulletin.";
    const S_WEAK: &str =
        "One blogger offers weak-support for the central claim without citations.";
    const S_DISTANT: &str =
        "This distant aside supports nothing relevant about the matter at hand.";

    /// Build a page body that clears the minimum-content floor.
    fn page(markers: &[&str]) -> String {
        let mut parts: Vec<String> = markers.iter().map(|s| s.to_string()).collect();
        for i in 0..6 {
            parts.push(format!(
                "Routine filler sentence number {i} keeps the page body above the floor."
            ));
        }
        parts.join(" ")
    }

    fn selector(pages: HashMap<String, String>, available: bool) -> EvidenceSelector {
        EvidenceSelector::new(
            Arc::new(MockExtractor { pages }),
            Arc::new(MockOracle { available }),
            EvidenceConfig::default(),
        )
    }

    fn selector_with(
        pages: HashMap<String, String>,
        config: EvidenceConfig,
    ) -> EvidenceSelector {
        EvidenceSelector::new(
            Arc::new(MockExtractor { pages }),
            Arc::new(MockOracle { available: true }),
            config,
        )
    }

    #[tokio::test]
    async fn collects_and_buckets_by_polarity() {
        let url = "https://example.org/a".to_string();
        let pages = HashMap::from([(url.clone(), page(&[S_SUPPORT, S_SUPPORT_2, S_DENY]))]);
        let selector = selector(pages, true);

        let (entailing, contradicting) = selector.select("the central claim", &[url.clone()]).await;
        assert_eq!(entailing.len(), 2);
        assert_eq!(contradicting.len(), 1);
        assert!(entailing.iter().all(|r| r.url == url));
        assert!(entailing.iter().all(|r| r.polarity == Polarity::Entail));
        assert_eq!(contradicting[0].sentence, S_DENY);
        assert_eq!(contradicting[0].score, 0.9);
    }

    #[tokio::test]
    async fn oracle_unavailable_yields_empty_evidence() {
        let url = "https://example.org/a".to_string();
        let pages = HashMap::from([(url.clone(), page(&[S_SUPPORT]))]);
        let selector = selector(pages, false);

        let (entailing, contradicting) = selector.select("the central claim", &[url]).await;
        assert!(entailing.is_empty());
        assert!(contradicting.is_empty());
    }

    #[tokio::test]
    async fn thin_pages_are_skipped() {
        let url = "https://example.org/thin".to_string();
        let pages = HashMap::from([(url.clone(), S_SUPPORT.to_string())]);
        let selector = selector(pages, true);

        let (entailing, _) = selector.select("the central claim", &[url]).await;
        assert!(entailing.is_empty());
    }

    #[tokio::test]
    async fn missing_pages_are_skipped() {
        let selector = selector(HashMap::new(), true);
        let (entailing, contradicting) = selector
            .select("the central claim", &["https://example.org/404".to_string()])
            .await;
        assert!(entailing.is_empty());
        assert!(contradicting.is_empty());
    }

    #[tokio::test]
    async fn scores_below_threshold_are_dropped() {
        let url = "https://example.org/weak".to_string();
        let pages = HashMap::from([(url.clone(), page(&[S_WEAK, S_DENY]))]);
        let selector = selector(pages, true);

        let (entailing, contradicting) = selector.select("the central claim", &[url]).await;
        // weak-support scores 0.5, under the 0.72 entail threshold.
        assert!(entailing.is_empty());
        assert_eq!(contradicting.len(), 1);
    }

    #[tokio::test]
    async fn merged_evidence_sorts_by_score_and_caps() {
        let url_a = "https://example.org/a".to_string();
        let url_b = "https://example.org/b".to_string();
        let pages = HashMap::from([
            (url_a.clone(), page(&[S_SUPPORT, S_SUPPORT_2])),
            (url_b.clone(), page(&[S_SUPPORT_HI])),
        ]);
        let config = EvidenceConfig {
            max_entailing: 2,
            ..EvidenceConfig::default()
        };
        let selector = selector_with(pages, config);

        let (entailing, _) = selector
            .select("the central claim", &[url_a.clone(), url_b.clone()])
            .await;
        assert_eq!(entailing.len(), 2);
        // The 0.95 judgment from url_b outranks the 0.8 ones from url_a.
        assert_eq!(entailing[0].url, url_b);
        assert_eq!(entailing[0].score, 0.95);
        assert_eq!(entailing[1].score, 0.8);
    }

    #[tokio::test]
    async fn url_cap_limits_fan_out() {
        let url_a = "https://example.org/a".to_string();
        let url_b = "https://example.org/b".to_string();
        let pages = HashMap::from([
            (url_a.clone(), page(&[S_SUPPORT])),
            (url_b.clone(), page(&[S_SUPPORT_HI])),
        ]);
        let config = EvidenceConfig {
            max_urls: 1,
            ..EvidenceConfig::default()
        };
        let selector = selector_with(pages, config);

        let (entailing, _) = selector
            .select("the central claim", &[url_a.clone(), url_b])
            .await;
        assert_eq!(entailing.len(), 1);
        assert_eq!(entailing[0].url, url_a);
    }

    #[tokio::test]
    async fn similarity_ranking_limits_candidates_per_url() {
        let url = "https://example.org/ranked".to_string();
        // The distant sentence embeds far from the claim and must lose
        // its candidate slot before classification.
        let pages = HashMap::from([(url.clone(), page(&[S_DISTANT, S_SUPPORT]))]);
        let config = EvidenceConfig {
            per_url_candidates: 1,
            ..EvidenceConfig::default()
        };
        let selector = selector_with(pages, config);

        let (entailing, _) = selector.select("the central claim", &[url]).await;
        assert_eq!(entailing.len(), 1);
        assert_eq!(entailing[0].sentence, S_SUPPORT);
        assert_eq!(entailing[0].similarity, 1.0);
    }
}
