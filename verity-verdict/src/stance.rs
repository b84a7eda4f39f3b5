//! Per-source stance assignment and card assembly.
//!
//! Evidence records bucket by source URL; buckets are created up front
//! for every URL in the result list, so a record for an unlisted URL is
//! dropped rather than growing the map.

use std::collections::HashMap;

use verity_core::constants::{MAX_CARD_SENTENCES, MAX_SNIPPET_CHARS, MAX_TITLE_CHARS};
use verity_core::models::{EvidenceRecord, SearchResult, SourceCard, Stance};

/// Evidence sentences attributed to one source URL.
#[derive(Debug, Clone, Default)]
pub struct UrlEvidence {
    pub support: Vec<String>,
    pub refute: Vec<String>,
}

impl UrlEvidence {
    fn stance(&self) -> Stance {
        match (self.support.is_empty(), self.refute.is_empty()) {
            (false, false) => Stance::Mixed,
            (false, true) => Stance::Support,
            (true, false) => Stance::Refute,
            (true, true) => Stance::Neutral,
        }
    }

    /// Supporting sentences first, then refuting, capped in total.
    fn sentences(&self, cap: usize) -> Vec<String> {
        self.support
            .iter()
            .chain(self.refute.iter())
            .take(cap)
            .cloned()
            .collect()
    }
}

/// Group evidence sentences under the result URL they came from.
pub fn bucket_evidence(
    results: &[SearchResult],
    entailing: &[EvidenceRecord],
    contradicting: &[EvidenceRecord],
) -> HashMap<String, UrlEvidence> {
    let mut buckets: HashMap<String, UrlEvidence> = results
        .iter()
        .map(|r| (r.url.clone(), UrlEvidence::default()))
        .collect();
    for record in entailing {
        if let Some(bucket) = buckets.get_mut(&record.url) {
            bucket.support.push(record.sentence.clone());
        }
    }
    for record in contradicting {
        if let Some(bucket) = buckets.get_mut(&record.url) {
            bucket.refute.push(record.sentence.clone());
        }
    }
    buckets
}

/// Build one presentation card per search result, in result order.
pub fn build_source_cards(
    results: &[SearchResult],
    buckets: &HashMap<String, UrlEvidence>,
) -> Vec<SourceCard> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let evidence = buckets.get(&result.url).cloned().unwrap_or_default();
            SourceCard {
                id: (i + 1) as u32,
                title: card_title(&result.title),
                url: if result.url.is_empty() {
                    "#".to_string()
                } else {
                    result.url.clone()
                },
                organization: if result.display_link.is_empty() {
                    "Web".to_string()
                } else {
                    result.display_link.clone()
                },
                snippet: Some(truncate_chars(&result.snippet, MAX_SNIPPET_CHARS)),
                stance: evidence.stance(),
                evidence_sentences: evidence.sentences(MAX_CARD_SENTENCES),
            }
        })
        .collect()
}

fn card_title(title: &str) -> String {
    if title.trim().is_empty() {
        "Unknown Source".to_string()
    } else {
        truncate_chars(title, MAX_TITLE_CHARS)
    }
}

/// Truncate on a character boundary, never mid code point.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::models::Polarity;

    fn result(url: &str, title: &str, display_link: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            snippet: format!("Snippet for {url}."),
            url: url.to_string(),
            display_link: display_link.to_string(),
        }
    }

    fn record(url: &str, sentence: &str, polarity: Polarity) -> EvidenceRecord {
        EvidenceRecord {
            url: url.to_string(),
            sentence: sentence.to_string(),
            similarity: 0.9,
            score: 0.8,
            polarity,
        }
    }

    #[test]
    fn stances_follow_bucket_contents() {
        let results = vec![
            result("https://a.example", "A", "a.example"),
            result("https://b.example", "B", "b.example"),
            result("https://c.example", "C", "c.example"),
            result("https://d.example", "D", "d.example"),
        ];
        let entailing = vec![
            record("https://a.example", "Agrees.", Polarity::Entail),
            record("https://c.example", "Also agrees.", Polarity::Entail),
        ];
        let contradicting = vec![
            record("https://b.example", "Disagrees.", Polarity::Contradict),
            record("https://c.example", "Also disagrees.", Polarity::Contradict),
        ];

        let buckets = bucket_evidence(&results, &entailing, &contradicting);
        let cards = build_source_cards(&results, &buckets);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].stance, Stance::Support);
        assert_eq!(cards[1].stance, Stance::Refute);
        assert_eq!(cards[2].stance, Stance::Mixed);
        assert_eq!(cards[3].stance, Stance::Neutral);
    }

    #[test]
    fn card_ids_are_one_based_result_positions() {
        let results = vec![
            result("https://a.example", "A", "a.example"),
            result("https://b.example", "B", "b.example"),
        ];
        let cards = build_source_cards(&results, &bucket_evidence(&results, &[], &[]));
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[1].id, 2);
    }

    #[test]
    fn sentences_are_support_first_and_capped() {
        let results = vec![result("https://a.example", "A", "a.example")];
        let entailing: Vec<EvidenceRecord> = (0..4)
            .map(|i| record("https://a.example", &format!("Support {i}."), Polarity::Entail))
            .collect();
        let contradicting: Vec<EvidenceRecord> = (0..3)
            .map(|i| {
                record(
                    "https://a.example",
                    &format!("Refute {i}."),
                    Polarity::Contradict,
                )
            })
            .collect();

        let buckets = bucket_evidence(&results, &entailing, &contradicting);
        let cards = build_source_cards(&results, &buckets);

        let sentences = &cards[0].evidence_sentences;
        assert_eq!(sentences.len(), 5);
        assert_eq!(sentences[3], "Support 3.");
        assert_eq!(sentences[4], "Refute 0.");
    }

    #[test]
    fn records_for_unlisted_urls_are_dropped() {
        let results = vec![result("https://a.example", "A", "a.example")];
        let entailing = vec![record("https://elsewhere.example", "Stray.", Polarity::Entail)];

        let buckets = bucket_evidence(&results, &entailing, &[]);
        assert_eq!(buckets.len(), 1);
        assert!(buckets["https://a.example"].support.is_empty());
    }

    #[test]
    fn blank_fields_get_presentation_fallbacks() {
        let results = vec![SearchResult {
            title: "   ".to_string(),
            snippet: String::new(),
            url: String::new(),
            display_link: String::new(),
        }];
        let cards = build_source_cards(&results, &bucket_evidence(&results, &[], &[]));

        assert_eq!(cards[0].title, "Unknown Source");
        assert_eq!(cards[0].url, "#");
        assert_eq!(cards[0].organization, "Web");
    }

    #[test]
    fn long_titles_truncate_on_char_boundaries() {
        let long_title = "é".repeat(250);
        let results = vec![result("https://a.example", &long_title, "a.example")];
        let cards = build_source_cards(&results, &bucket_evidence(&results, &[], &[]));

        assert_eq!(cards[0].title.chars().count(), 200);
        assert!(cards[0].title.chars().all(|c| c == 'é'));
    }
}
