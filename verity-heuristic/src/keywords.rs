//! Keyword and source-weight tables for the heuristic scorer.
//!
//! The tables are compiled in. They encode how fact-checking language
//! reads in search snippets ("debunked", "fact-check: false") rather than
//! anything claim-specific, so there is nothing for operators to tune.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use verity_core::models::SearchResult;

/// A keyword with its weight and compiled whole-word matcher.
pub struct KeywordPattern {
    pub phrase: &'static str,
    pub weight: f64,
    regex: Option<Regex>,
}

impl KeywordPattern {
    fn new(phrase: &'static str, weight: f64) -> Self {
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(phrase))).ok();
        Self {
            phrase,
            weight,
            regex,
        }
    }

    /// Whole-word occurrences of the phrase in the given lowercased text.
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map(|re| re.find_iter(text).count())
            .unwrap_or(0)
    }
}

/// Keywords whose presence supports a claim.
pub static SUPPORTING: LazyLock<Vec<KeywordPattern>> = LazyLock::new(|| {
    vec![
        KeywordPattern::new("confirmed", 3.0),
        KeywordPattern::new("verified", 3.0),
        KeywordPattern::new("accurate", 3.0),
        KeywordPattern::new("fact-check: true", 4.0),
        KeywordPattern::new("correct", 2.0),
        KeywordPattern::new("evidence", 1.0),
    ]
});

/// Keywords whose presence refutes a claim.
pub static REFUTING: LazyLock<Vec<KeywordPattern>> = LazyLock::new(|| {
    vec![
        KeywordPattern::new("hoax", 3.0),
        KeywordPattern::new("false", 3.0),
        KeywordPattern::new("debunked", 3.0),
        KeywordPattern::new("myth", 3.0),
        KeywordPattern::new("fact-check: false", 4.0),
        KeywordPattern::new("incorrect", 2.0),
        KeywordPattern::new("misleading", 2.0),
        KeywordPattern::new("baseless", 1.0),
    ]
});

/// Negation cues. A supporting keyword preceded by one of these flips to
/// the refuting side; refuting keywords are never negation-checked.
pub const NEGATIONS: [&str; 6] = [
    "not",
    "isnt",
    "is not",
    "aint",
    "not verified",
    "not confirmed",
];

/// True when the phrase appears negated anywhere in the text.
pub fn is_negated(phrase: &str, text: &str) -> bool {
    NEGATIONS
        .iter()
        .any(|neg| text.contains(&format!("{neg} {phrase}")))
}

/// Domains whose coverage counts for more.
pub const RELIABLE_SOURCES: [&str; 5] = [
    "reuters.com",
    "apnews.com",
    "snopes.com",
    "politifact.com",
    "factcheck.org",
];

/// Multiplier applied to matches from a reliable source.
pub const RELIABLE_WEIGHT: f64 = 1.5;

/// Multiplier for everything else.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Source-weight multiplier for one search result.
///
/// The registered host of the result URL must equal a listed domain or be
/// a subdomain of one. Unparseable URLs fall back to the display link.
pub fn source_weight(result: &SearchResult) -> f64 {
    let host = Url::parse(&result.url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_else(|| result.display_link.trim().to_lowercase());

    let reliable = RELIABLE_SOURCES
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")));

    if reliable {
        RELIABLE_WEIGHT
    } else {
        DEFAULT_WEIGHT
    }
}
