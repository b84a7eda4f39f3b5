//! Search providers.

pub mod web_search;

pub use web_search::WebSearchProvider;
