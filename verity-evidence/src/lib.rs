//! # verity-evidence
//!
//! Sentence-level evidence selection: page segmentation, similarity
//! ranking against the claim, and entailment-filtered record pools.

pub mod segment;
pub mod selector;
pub mod similarity;

pub use selector::EvidenceSelector;
