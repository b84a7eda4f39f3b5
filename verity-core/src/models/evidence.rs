use serde::{Deserialize, Serialize};

/// Entailment relation between a sentence and the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Entail,
    Contradict,
    Neutral,
}

/// One oracle judgment for a single sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntailmentJudgment {
    pub polarity: Polarity,
    /// Confidence in the polarity, in [0, 1].
    pub score: f64,
}

/// A selected evidence sentence with its provenance and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub url: String,
    pub sentence: String,
    /// Cosine similarity to the claim embedding.
    pub similarity: f64,
    /// Entailment or contradiction score from the oracle.
    pub score: f64,
    pub polarity: Polarity,
}

/// Minimal evidence form exposed in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub url: String,
    pub sentence: String,
}

impl From<&EvidenceRecord> for EvidenceItem {
    fn from(record: &EvidenceRecord) -> Self {
        Self {
            url: record.url.clone(),
            sentence: record.sentence.clone(),
        }
    }
}

/// Supporting and refuting evidence attached to a verification result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvidenceBundle {
    pub support: Vec<EvidenceItem>,
    pub refute: Vec<EvidenceItem>,
}
