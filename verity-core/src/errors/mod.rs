//! Error taxonomy for the Verity workspace.
//!
//! Each subsystem has its own error enum; `VerityError` aggregates them so
//! callers above the subsystem boundary handle a single type.

mod cache_error;
mod oracle_error;
mod search_error;

pub use cache_error::CacheError;
pub use oracle_error::OracleError;
pub use search_error::SearchError;

/// Top-level error type for the whole engine.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error("no claim provided")]
    EmptyClaim,

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Convenience alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;
