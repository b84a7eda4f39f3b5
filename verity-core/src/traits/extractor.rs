use async_trait::async_trait;

/// Page-content extraction provider.
#[async_trait]
pub trait IContentExtractor: Send + Sync {
    /// Fetch a URL and return its cleaned main text.
    ///
    /// Infallible by contract: any fetch or parse failure yields an empty
    /// string, and the page is simply skipped upstream.
    async fn fetch_and_clean(&self, url: &str) -> String;
}
