//! Sentence segmentation for evidence candidates.

use verity_core::config::EvidenceConfig;

/// Split cleaned page text into candidate sentences.
///
/// Whitespace is collapsed first, then the text splits after every `.`,
/// `!`, or `?` that is followed by whitespace. Kept sentences must fall
/// inside the configured character band; collection stops at the per-page
/// cap. Splitting after an abbreviation ("U.S. officials") leaves short
/// fragments behind, which is fine: they fail the length floor.
pub fn sentences(text: &str, config: &EvidenceConfig) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = collapsed.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next(); // consume the separator
            let kept = push_in_band(&mut out, &mut current, config);
            if kept && out.len() >= config.max_sentences_per_page {
                return out;
            }
        }
    }
    push_in_band(&mut out, &mut current, config);

    out
}

/// Keep the accumulated sentence if its character count is in band.
/// Returns true when a sentence was kept.
fn push_in_band(out: &mut Vec<String>, current: &mut String, config: &EvidenceConfig) -> bool {
    let sentence = current.trim();
    let kept = if sentence.is_empty() {
        false
    } else {
        let len = sentence.chars().count();
        if len >= config.min_sentence_chars && len <= config.max_sentence_chars {
            out.push(sentence.to_string());
            true
        } else {
            false
        }
    };
    current.clear();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EvidenceConfig {
        EvidenceConfig::default()
    }

    /// A sentence comfortably inside the 40..=300 character band.
    fn mid(n: usize) -> String {
        format!("Sentence number {n} carries enough characters to be a candidate.")
    }

    #[test]
    fn splits_on_terminators_followed_by_whitespace() {
        let text = format!("{} {} {}", mid(1), mid(2), mid(3));
        let result = sentences(&text, &config());
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], mid(1));
        assert_eq!(result[2], mid(3));
    }

    #[test]
    fn short_fragments_are_dropped() {
        let text = format!("Too short. {} Also short!", mid(1));
        let result = sentences(&text, &config());
        assert_eq!(result, vec![mid(1)]);
    }

    #[test]
    fn overlong_sentences_are_dropped() {
        let long = format!("{}.", "word ".repeat(80).trim());
        assert!(long.chars().count() > 300);
        let text = format!("{long} {}", mid(1));
        let result = sentences(&text, &config());
        assert_eq!(result, vec![mid(1)]);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        let forty = format!("{}.", "x".repeat(39));
        assert_eq!(forty.chars().count(), 40);
        let three_hundred = format!("{}.", "y".repeat(299));
        assert_eq!(three_hundred.chars().count(), 300);

        let text = format!("{forty} {three_hundred}");
        let result = sentences(&text, &config());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn abbreviations_split_into_droppable_fragments() {
        let text = format!("U.S. officials spoke briefly. {}", mid(1));
        let result = sentences(&text, &config());
        // "U.S." ends at the space after its final dot, leaving two short
        // fragments that both fail the length floor.
        assert_eq!(result, vec![mid(1)]);
    }

    #[test]
    fn terminator_without_following_whitespace_does_not_split() {
        let text = format!(
            "Version 2.5 of the report was published as expected by the panel. {}",
            mid(1)
        );
        let result = sentences(&text, &config());
        assert_eq!(result.len(), 2);
        assert!(result[0].starts_with("Version 2.5"));
    }

    #[test]
    fn trailing_text_without_terminator_is_kept_when_in_band() {
        let trailing = "this trailing clause never ends with punctuation yet counts";
        assert!(trailing.chars().count() >= 40);
        let result = sentences(trailing, &config());
        assert_eq!(result, vec![trailing.to_string()]);
    }

    #[test]
    fn per_page_cap_stops_collection() {
        let config = EvidenceConfig {
            max_sentences_per_page: 5,
            ..EvidenceConfig::default()
        };
        let many = (0..20).map(mid).collect::<Vec<_>>().join(" ");
        let result = sentences(&many, &config);
        assert_eq!(result.len(), 5);
        assert_eq!(result[0], mid(0));
    }

    #[test]
    fn whitespace_is_collapsed_before_splitting() {
        let text = format!("{}   \n\t  {}", mid(1), mid(2));
        let result = sentences(&text, &config());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(sentences("", &config()).is_empty());
        assert!(sentences("   \n  ", &config()).is_empty());
    }
}
