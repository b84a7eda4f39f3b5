use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// Outcome of the keyword heuristic over search snippets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicResult {
    pub verdict: Verdict,
    /// Share of the total score on the supporting side, as a rounded percent.
    pub support_pct: u8,
    pub refute_pct: u8,
    /// Raw weighted scores, kept for diagnostics and the cache payload.
    pub support_score: f64,
    pub refute_score: f64,
}

impl HeuristicResult {
    /// The no-signal outcome: nothing matched on either side.
    pub fn uncertain() -> Self {
        Self {
            verdict: Verdict::Uncertain,
            support_pct: 0,
            refute_pct: 0,
            support_score: 0.0,
            refute_score: 0.0,
        }
    }
}
