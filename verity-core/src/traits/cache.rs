use crate::errors::VerityResult;
use crate::models::{CacheEntry, Verdict};

/// Persistent verdict cache keyed by normalized claim text.
pub trait IVerdictCache: Send + Sync {
    /// Look up a prior verdict for a normalized claim.
    fn get(&self, claim_norm: &str) -> VerityResult<Option<CacheEntry>>;

    /// Insert or overwrite the verdict for a normalized claim.
    ///
    /// Re-verifying a claim must replace its row, never duplicate it.
    fn upsert(
        &self,
        claim_norm: &str,
        verdict: Verdict,
        link: &str,
        explanation: &str,
        evidence: &serde_json::Value,
    ) -> VerityResult<()>;
}
