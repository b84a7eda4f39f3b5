//! Custom-search web provider.
//!
//! One GET per query with `key`, `cx`, `q`, and `num` parameters. Missing
//! credentials fail before any request goes out, and a provider failure
//! is always an error, never an empty result list.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use verity_core::config::defaults::SEARCH_RESULTS_HARD_CAP;
use verity_core::config::SearchConfig;
use verity_core::errors::{SearchError, VerityResult};
use verity_core::models::SearchResult;
use verity_core::traits::ISearchProvider;

/// Raw search response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

/// One raw result item; every field is optional on the wire.
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
    #[serde(default, rename = "displayLink")]
    display_link: String,
}

impl From<RawItem> for SearchResult {
    fn from(item: RawItem) -> Self {
        SearchResult {
            title: item.title,
            snippet: item.snippet,
            url: item.link,
            display_link: item.display_link,
        }
    }
}

/// HTTP-backed search provider.
pub struct WebSearchProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    engine_id: Option<String>,
}

impl WebSearchProvider {
    pub fn new(config: &SearchConfig) -> VerityResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::RequestFailed {
                reason: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            engine_id: config.engine_id.clone(),
        })
    }
}

#[async_trait]
impl ISearchProvider for WebSearchProvider {
    async fn search(&self, query: &str, max_results: usize) -> VerityResult<Vec<SearchResult>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::MissingCredentials {
                name: "API_KEY".to_string(),
            })?;
        let cx = self
            .engine_id
            .as_deref()
            .ok_or_else(|| SearchError::MissingCredentials {
                name: "SEARCH_ENGINE_ID".to_string(),
            })?;

        let num = max_results.clamp(1, SEARCH_RESULTS_HARD_CAP);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", key),
                ("cx", cx),
                ("q", query),
                ("num", &num.to_string()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| SearchError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        debug!(query, results = body.items.len(), "search complete");
        Ok(body.items.into_iter().map(SearchResult::from).collect())
    }

    fn name(&self) -> &str {
        "web-search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_without_credentials() -> WebSearchProvider {
        WebSearchProvider::new(&SearchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let provider = provider_without_credentials();
        let err = provider.search("some claim", 10).await.unwrap_err();
        assert!(matches!(
            err,
            verity_core::VerityError::Search(SearchError::MissingCredentials { ref name })
                if name == "API_KEY"
        ));
    }

    #[tokio::test]
    async fn missing_engine_id_is_reported_by_name() {
        let config = SearchConfig {
            api_key: Some("k".to_string()),
            ..SearchConfig::default()
        };
        let provider = WebSearchProvider::new(&config).unwrap();
        let err = provider.search("some claim", 10).await.unwrap_err();
        assert!(matches!(
            err,
            verity_core::VerityError::Search(SearchError::MissingCredentials { ref name })
                if name == "SEARCH_ENGINE_ID"
        ));
    }

    #[test]
    fn empty_body_parses_to_zero_items() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn raw_items_map_with_defaults_for_missing_fields() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"items": [
                {"title": "A", "snippet": "s", "link": "https://a.example", "displayLink": "a.example"},
                {"title": "B"}
            ]}"#,
        )
        .unwrap();
        let results: Vec<SearchResult> = parsed.items.into_iter().map(SearchResult::from).collect();
        assert_eq!(results[0].url, "https://a.example");
        assert_eq!(results[0].display_link, "a.example");
        assert_eq!(results[1].url, "");
        assert_eq!(results[1].snippet, "");
    }
}
