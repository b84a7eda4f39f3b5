//! Lexical fallback provider.
//!
//! Deterministic, offline scoring: hashed term-frequency vectors for
//! embeddings, and token-overlap with negation-cue parity for entailment.
//! Far weaker than a real model, which is why it only joins the chain
//! when the operator opts in.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use verity_core::errors::VerityResult;
use verity_core::models::{EntailmentJudgment, Polarity};
use verity_core::traits::IScoringOracle;

/// A sentence must cover this share of the claim's content tokens before
/// the provider ventures a polarity at all.
const MIN_OVERLAP: f64 = 0.5;

/// Function words and negative markers that signal negation.
const NEGATION_CUES: [&str; 14] = [
    "not", "no", "never", "isnt", "arent", "wasnt", "werent", "dont", "doesnt", "didnt", "cannot",
    "cant", "without", "untrue",
];

/// Offline lexical scoring oracle.
pub struct LexicalOracle {
    dimensions: usize,
}

impl LexicalOracle {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Build a hashed term-frequency vector for the given text.
    fn term_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms carry more signal than near-stopwords.
            let weight = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * weight;
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }

    fn has_negation(tokens: &[String]) -> bool {
        tokens.iter().any(|t| NEGATION_CUES.contains(&t.as_str()))
    }

    fn content_set(tokens: &[String]) -> HashSet<&str> {
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !NEGATION_CUES.contains(t))
            .collect()
    }

    /// Judge one sentence against the claim.
    ///
    /// Coverage of the claim's content tokens is the score. Low coverage
    /// is Neutral; high coverage with mismatched negation cues reads as
    /// contradiction, otherwise as entailment.
    fn judge(&self, claim_tokens: &[String], sentence: &str) -> EntailmentJudgment {
        let sentence_tokens = Self::tokenize(sentence);
        let claim_content = Self::content_set(claim_tokens);
        let sentence_content = Self::content_set(&sentence_tokens);

        if claim_content.is_empty() || sentence_content.is_empty() {
            return EntailmentJudgment {
                polarity: Polarity::Neutral,
                score: 1.0,
            };
        }

        let covered = claim_content
            .iter()
            .filter(|t| sentence_content.contains(**t))
            .count();
        let overlap = covered as f64 / claim_content.len() as f64;

        if overlap < MIN_OVERLAP {
            return EntailmentJudgment {
                polarity: Polarity::Neutral,
                score: 1.0 - overlap,
            };
        }

        let flipped = Self::has_negation(claim_tokens) != Self::has_negation(&sentence_tokens);
        EntailmentJudgment {
            polarity: if flipped {
                Polarity::Contradict
            } else {
                Polarity::Entail
            },
            score: overlap,
        }
    }
}

#[async_trait]
impl IScoringOracle for LexicalOracle {
    async fn embed_batch(&self, texts: &[String]) -> VerityResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.term_vector(t)).collect())
    }

    async fn classify_batch(
        &self,
        claim: &str,
        sentences: &[String],
    ) -> VerityResult<Vec<EntailmentJudgment>> {
        let claim_tokens = Self::tokenize(claim);
        Ok(sentences
            .iter()
            .map(|s| self.judge(&claim_tokens, s))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "lexical-oracle"
    }

    fn is_available(&self) -> bool {
        true // Always available, no external model required.
    }
}
