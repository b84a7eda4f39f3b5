//! Confidence scoring for a fused verdict.

use verity_core::models::Verdict;

const BASE_CONFIDENCE: u8 = 75;
const DECISIVE_CONFIDENCE: u8 = 90;
const CORROBORATION_BONUS: u8 = 10;
const MAX_CONFIDENCE: u8 = 95;

/// Score how confident the engine is in a verdict.
///
/// Decisive verdicts start higher than uncertain ones; a corroborated
/// evidence pool (two or more sentences on either side) adds a bonus,
/// capped below certainty.
pub fn confidence(verdict: Verdict, entail_count: usize, contra_count: usize) -> u8 {
    let base = if verdict.is_decisive() {
        DECISIVE_CONFIDENCE
    } else {
        BASE_CONFIDENCE
    };
    if entail_count >= 2 || contra_count >= 2 {
        (base + CORROBORATION_BONUS).min(MAX_CONFIDENCE)
    } else {
        base
    }
}
