//! # verity-retrieval
//!
//! External retrieval for the Verity engine: the web-search provider that
//! turns a claim into result items, and the page extractor that turns a
//! result URL into clean main text.

pub mod extract;
pub mod search;

pub use extract::PageExtractor;
pub use search::WebSearchProvider;
