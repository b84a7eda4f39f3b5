use async_trait::async_trait;

use crate::errors::VerityResult;
use crate::models::EntailmentJudgment;

/// Semantic scoring provider: embeddings plus entailment classification.
#[async_trait]
pub trait IScoringOracle: Send + Sync {
    /// Embed a batch of texts into L2-normalized vectors.
    async fn embed_batch(&self, texts: &[String]) -> VerityResult<Vec<Vec<f32>>>;

    /// Judge each sentence against the claim, one judgment per sentence.
    async fn classify_batch(
        &self,
        claim: &str,
        sentences: &[String],
    ) -> VerityResult<Vec<EntailmentJudgment>>;

    /// The dimensionality of vectors produced by this oracle.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this oracle can currently serve requests.
    fn is_available(&self) -> bool;
}
