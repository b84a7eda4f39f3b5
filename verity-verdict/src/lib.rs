//! # verity-verdict
//!
//! Final-stage verdict assembly: evidence-count fusion over the
//! heuristic verdict, confidence scoring, the four-template explanation
//! builder, and per-source stance cards.

pub mod confidence;
pub mod explanation;
pub mod fuser;
pub mod stance;

pub use confidence::confidence;
pub use explanation::build_explanation;
pub use fuser::fuse;
pub use stance::{bucket_evidence, build_source_cards, UrlEvidence};
