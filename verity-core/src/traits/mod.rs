//! Trait seams between the engine and its external collaborators.

mod cache;
mod extractor;
mod oracle;
mod rewriter;
mod search;

pub use cache::IVerdictCache;
pub use extractor::IContentExtractor;
pub use oracle::IScoringOracle;
pub use rewriter::ITextRewriter;
pub use search::ISearchProvider;
