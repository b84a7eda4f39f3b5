//! Verdict fusion.
//!
//! Evidence counts override the heuristic only with a clear majority:
//! at least two sentences on a side, and strictly more than the other
//! side. Anything weaker falls through to the heuristic verdict.

use tracing::debug;
use verity_core::models::{EvidenceRecord, Verdict};

/// Fuse the heuristic verdict with the selected evidence pools.
pub fn fuse(
    heuristic: Verdict,
    entailing: &[EvidenceRecord],
    contradicting: &[EvidenceRecord],
) -> Verdict {
    let entail = entailing.len();
    let contra = contradicting.len();

    let fused = if entail >= 2 && entail >= contra + 1 {
        Verdict::True
    } else if contra >= 2 && contra >= entail + 1 {
        Verdict::False
    } else {
        heuristic
    };

    debug!(
        entail,
        contra,
        heuristic = heuristic.as_str(),
        fused = fused.as_str(),
        "verdict fused"
    );
    fused
}
