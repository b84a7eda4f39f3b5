//! Keyword-weight verdict heuristic.
//!
//! A fast, offline first pass over search snippets. Its verdict only
//! stands when evidence fusion is inconclusive, but its percentages ride
//! along in every response payload.

use tracing::debug;

use verity_core::config::HeuristicConfig;
use verity_core::models::{HeuristicResult, SearchResult, Verdict};

use crate::keywords;

/// Score search results into a heuristic verdict.
///
/// Each keyword contributes `weight * occurrences * source_weight` to its
/// side. A side must outscore the other by `decisive_ratio` to win;
/// otherwise the verdict is Uncertain. No matches at all is the zero
/// outcome: Uncertain with 0/0 percentages.
pub fn score(results: &[SearchResult], config: &HeuristicConfig) -> HeuristicResult {
    let mut support = 0.0_f64;
    let mut refute = 0.0_f64;

    for result in results {
        let text = format!("{} {}", result.title, result.snippet).to_lowercase();
        let weight = keywords::source_weight(result);

        for pattern in keywords::SUPPORTING.iter() {
            let matches = pattern.count(&text);
            if matches == 0 {
                continue;
            }
            let contribution = pattern.weight * matches as f64 * weight;
            if keywords::is_negated(pattern.phrase, &text) {
                refute += contribution;
            } else {
                support += contribution;
            }
        }

        for pattern in keywords::REFUTING.iter() {
            let matches = pattern.count(&text);
            if matches == 0 {
                continue;
            }
            refute += pattern.weight * matches as f64 * weight;
        }
    }

    let total = support + refute;
    if total == 0.0 {
        return HeuristicResult::uncertain();
    }

    let verdict = if refute >= support * config.decisive_ratio {
        Verdict::False
    } else if support >= refute * config.decisive_ratio {
        Verdict::True
    } else {
        Verdict::Uncertain
    };

    debug!(support, refute, verdict = %verdict, "heuristic scored");

    HeuristicResult {
        verdict,
        support_pct: (support / total * 100.0).round() as u8,
        refute_pct: (refute / total * 100.0).round() as u8,
        support_score: support,
        refute_score: refute,
    }
}
