//! # verity-oracle
//!
//! Semantic scoring for the Verity engine: sentence embeddings and
//! claim-versus-sentence entailment judgments. A degradation chain tries
//! the configured remote inference service first and, when opted in,
//! falls back to a deterministic lexical provider. Embeddings are cached
//! in-memory keyed by content hash.

pub mod degradation;
pub mod embed_cache;
pub mod engine;
pub mod providers;

pub use degradation::DegradationChain;
pub use engine::OracleEngine;
pub use providers::{LexicalOracle, RemoteOracle};
