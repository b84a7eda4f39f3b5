//! # verity-cache
//!
//! Verdict persistence keyed by normalized claim text. A SQLite table
//! holds one row per claim (upsert semantics); a small in-memory L1
//! sits in front of it for repeat lookups within a process.

pub mod engine;
pub mod l1;
pub mod store;

pub use engine::ClaimCache;
pub use store::SqliteStore;

use verity_core::errors::{CacheError, VerityError};

/// Map a low-level SQLite failure into the cache error taxonomy.
pub(crate) fn to_cache_err(message: impl Into<String>) -> VerityError {
    CacheError::SqliteError {
        message: message.into(),
    }
    .into()
}
