//! Structured explanation text for a verdict.
//!
//! Four fixed templates, chosen by the evidence counts alone. The
//! refuting branch is checked before the supporting one, and both
//! demand the same clear majority as the fuser, so the explanation
//! never contradicts the fused verdict.

use verity_core::constants::MAX_QUOTED_SENTENCES;
use verity_core::models::EvidenceRecord;

/// Build the explanation for a claim from the selected evidence.
pub fn build_explanation(
    claim: &str,
    entailing: &[EvidenceRecord],
    contradicting: &[EvidenceRecord],
) -> String {
    let entail = entailing.len();
    let contra = contradicting.len();

    if entail == 0 && contra == 0 {
        return format!(
            "After reviewing top sources, no strong evidence was found to either \
             support or refute the claim about '{claim}'."
        );
    }
    if contra >= 2 && contra >= entail + 1 {
        return format!(
            "Evidence strongly suggests the claim about '{claim}' is false. \
             Key sources state: {}",
            quoted_sentences(contradicting)
        );
    }
    if entail >= 2 && entail >= contra + 1 {
        return format!(
            "Evidence tends to support the claim about '{claim}'. \
             Relevant sources mention: {}",
            quoted_sentences(entailing)
        );
    }
    format!("The evidence regarding '{claim}' is mixed and inconclusive based on available sources.")
}

fn quoted_sentences(records: &[EvidenceRecord]) -> String {
    records
        .iter()
        .take(MAX_QUOTED_SENTENCES)
        .map(|r| format!("\"{}\"", r.sentence))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::models::Polarity;

    fn record(sentence: &str, polarity: Polarity) -> EvidenceRecord {
        EvidenceRecord {
            url: "https://example.org/page".to_string(),
            sentence: sentence.to_string(),
            similarity: 0.9,
            score: 0.8,
            polarity,
        }
    }

    #[test]
    fn no_evidence_uses_the_no_signal_template() {
        let text = build_explanation("the canal opened in 1914", &[], &[]);
        assert_eq!(
            text,
            "After reviewing top sources, no strong evidence was found to either \
             support or refute the claim about 'the canal opened in 1914'."
        );
    }

    #[test]
    fn supporting_majority_quotes_the_top_sentences() {
        let entailing = vec![
            record("The canal opened to traffic in 1914.", Polarity::Entail),
            record("Its first transit was completed in 1914.", Polarity::Entail),
            record("A third sentence that should not be quoted.", Polarity::Entail),
        ];
        let text = build_explanation("the canal opened in 1914", &entailing, &[]);
        assert_eq!(
            text,
            "Evidence tends to support the claim about 'the canal opened in 1914'. \
             Relevant sources mention: \"The canal opened to traffic in 1914.\" \
             \"Its first transit was completed in 1914.\""
        );
    }

    #[test]
    fn refuting_majority_quotes_refuting_sentences() {
        let contradicting = vec![
            record("The story is a long-running hoax.", Polarity::Contradict),
            record("No such event ever took place.", Polarity::Contradict),
        ];
        let text = build_explanation("the event happened", &[], &contradicting);
        assert_eq!(
            text,
            "Evidence strongly suggests the claim about 'the event happened' is false. \
             Key sources state: \"The story is a long-running hoax.\" \
             \"No such event ever took place.\""
        );
    }

    #[test]
    fn tied_pools_read_as_mixed() {
        // Two on each side: neither majority holds, so the text is mixed.
        let entailing = vec![
            record("Supports one.", Polarity::Entail),
            record("Supports two.", Polarity::Entail),
        ];
        let contradicting = vec![
            record("Refutes one.", Polarity::Contradict),
            record("Refutes two.", Polarity::Contradict),
        ];
        let text = build_explanation("a contested claim", &entailing, &contradicting);
        assert_eq!(
            text,
            "The evidence regarding 'a contested claim' is mixed and inconclusive \
             based on available sources."
        );
    }

    #[test]
    fn one_on_each_side_is_mixed_without_quotes() {
        let entailing = vec![record("One sentence agrees.", Polarity::Entail)];
        let contradicting = vec![record("One sentence disagrees.", Polarity::Contradict)];
        let text = build_explanation("a contested claim", &entailing, &contradicting);
        assert!(text.contains("mixed and inconclusive"));
        assert!(!text.contains('"'));
    }

    #[test]
    fn single_sentence_is_mixed_not_supported() {
        let entailing = vec![record("Only one sentence agrees.", Polarity::Entail)];
        let text = build_explanation("a thin claim", &entailing, &[]);
        assert!(text.contains("mixed and inconclusive"));
    }
}
