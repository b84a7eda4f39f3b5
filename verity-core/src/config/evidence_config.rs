use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence-selection subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Maximum URLs fetched per verification.
    pub max_urls: usize,
    /// Candidate sentences kept per URL after similarity ranking.
    pub per_url_candidates: usize,
    /// Minimum entailment score for a supporting sentence.
    pub entail_threshold: f64,
    /// Minimum contradiction score for a refuting sentence.
    pub contra_threshold: f64,
    /// Cap on supporting sentences across all URLs.
    pub max_entailing: usize,
    /// Cap on refuting sentences across all URLs.
    pub max_contradicting: usize,
    /// Pages with less cleaned text than this are skipped.
    pub min_content_chars: usize,
    /// Shortest sentence considered a candidate.
    pub min_sentence_chars: usize,
    /// Longest sentence considered a candidate.
    pub max_sentence_chars: usize,
    /// Hard cap on sentences taken from one page.
    pub max_sentences_per_page: usize,
    /// HTTP timeout for page fetches.
    pub fetch_timeout_secs: u64,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            max_urls: defaults::DEFAULT_MAX_URLS,
            per_url_candidates: defaults::DEFAULT_PER_URL_CANDIDATES,
            entail_threshold: defaults::DEFAULT_ENTAIL_THRESHOLD,
            contra_threshold: defaults::DEFAULT_CONTRA_THRESHOLD,
            max_entailing: defaults::DEFAULT_MAX_ENTAILING,
            max_contradicting: defaults::DEFAULT_MAX_CONTRADICTING,
            min_content_chars: defaults::DEFAULT_MIN_CONTENT_CHARS,
            min_sentence_chars: defaults::DEFAULT_MIN_SENTENCE_CHARS,
            max_sentence_chars: defaults::DEFAULT_MAX_SENTENCE_CHARS,
            max_sentences_per_page: defaults::DEFAULT_MAX_SENTENCES_PER_PAGE,
            fetch_timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}
