use async_trait::async_trait;

/// Best-effort explanation polisher.
#[async_trait]
pub trait ITextRewriter: Send + Sync {
    /// Rewrite text for readability.
    ///
    /// Implementations must return the input unchanged on any failure;
    /// a rewriter can never make a verification worse than unpolished.
    async fn rewrite(&self, text: &str) -> String;

    /// Human-readable rewriter name.
    fn name(&self) -> &str;
}
