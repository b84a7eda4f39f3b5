//! Claim text handling.
//!
//! A claim enters the system as free text. The raw (trimmed) form is what
//! gets searched and quoted back to the user; the normalized form is the
//! cache identity.

use serde::{Deserialize, Serialize};

/// Collapse internal whitespace runs to single spaces and lowercase.
///
/// Normalization is idempotent, so a normalized claim always maps to
/// itself. This is the only claim identity the cache ever sees.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A user-submitted claim in both its display and cache-identity forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    raw: String,
    normalized: String,
}

impl Claim {
    pub fn new(text: impl AsRef<str>) -> Self {
        let raw = text.as_ref().trim().to_string();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// The trimmed original text, used for search queries and explanations.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whitespace-collapsed, lowercased form, used as the cache key.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True when nothing checkable was submitted.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
