use serde::{Deserialize, Serialize};

/// One normalized result from a web-search provider.
///
/// Providers map their raw payloads into this shape; absent fields become
/// empty strings so downstream code never sees provider-specific nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
    /// Short display form of the host, e.g. "www.reuters.com".
    pub display_link: String,
}
