use serde::{Deserialize, Serialize};

/// How a single source relates to the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Support,
    Refute,
    Mixed,
    Neutral,
}

/// A consulted source as presented in a verification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCard {
    /// 1-based position in the search results.
    pub id: u32,
    pub title: String,
    pub url: String,
    /// Display host of the source, or "Web" when unknown.
    pub organization: String,
    pub snippet: Option<String>,
    pub stance: Stance,
    /// Evidence sentences drawn from this source, support before refute.
    pub evidence_sentences: Vec<String>,
}
