use serde::{Deserialize, Serialize};

use super::evidence::EvidenceBundle;
use super::source_card::SourceCard;
use super::verdict::Verdict;

/// The complete answer to one verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verdict: Verdict,
    /// Confidence in the verdict, 0 to 100.
    pub confidence: u8,
    pub explanation: String,
    pub sources: Vec<SourceCard>,
    pub evidence: EvidenceBundle,
    /// Wall-clock seconds spent, rounded to milliseconds.
    pub processing_time: f64,
}
