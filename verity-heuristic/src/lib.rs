//! # verity-heuristic
//!
//! Keyword-weight heuristic verdict over search result snippets.
//! Counts weighted fact-checking vocabulary on each side of a claim,
//! boosted for known-reliable sources, and decides True/False/Uncertain
//! by a configurable dominance ratio.

pub mod keywords;
pub mod scorer;

pub use scorer::score;
