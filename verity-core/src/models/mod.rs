//! Data models shared across the workspace.

mod cache_entry;
mod degradation_event;
mod evidence;
mod heuristic;
mod report;
mod search_result;
mod source_card;
mod verdict;

pub use cache_entry::CacheEntry;
pub use degradation_event::DegradationEvent;
pub use evidence::{EntailmentJudgment, EvidenceBundle, EvidenceItem, EvidenceRecord, Polarity};
pub use heuristic::HeuristicResult;
pub use report::VerificationResult;
pub use search_result::SearchResult;
pub use source_card::{SourceCard, Stance};
pub use verdict::Verdict;
