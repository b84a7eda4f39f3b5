//! # verity-engine
//!
//! The assembled verification pipeline: retrieval, heuristic scoring,
//! evidence selection, fusion, explanation, and the verdict cache,
//! exposed as one `verify` operation.

pub mod engine;
pub mod rewriter;

pub use engine::VerityEngine;
pub use rewriter::{create_rewriter, NoopRewriter, RemoteRewriter};
