use async_trait::async_trait;

use crate::errors::VerityResult;
use crate::models::SearchResult;

/// Web-search retrieval provider.
#[async_trait]
pub trait ISearchProvider: Send + Sync {
    /// Run a query and return normalized results.
    ///
    /// Zero results is `Ok(vec![])`; an error means the provider itself
    /// failed and the caller cannot proceed.
    async fn search(&self, query: &str, max_results: usize) -> VerityResult<Vec<SearchResult>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
