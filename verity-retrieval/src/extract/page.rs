//! Page fetching with cleaning.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use verity_core::config::EvidenceConfig;
use verity_core::constants::FETCH_USER_AGENT;
use verity_core::errors::{SearchError, VerityResult};
use verity_core::traits::IContentExtractor;

use super::html;

/// HTTP page fetcher with readable-text extraction.
///
/// A single slow or broken page must never sink a verification, so the
/// trait surface is infallible: failures log at debug and come back as
/// empty text.
pub struct PageExtractor {
    client: reqwest::Client,
}

impl PageExtractor {
    pub fn new(config: &EvidenceConfig) -> VerityResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(FETCH_USER_AGENT)
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| SearchError::RequestFailed {
                reason: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html::extract_main_text(&body))
    }
}

#[async_trait]
impl IContentExtractor for PageExtractor {
    async fn fetch_and_clean(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                debug!(url, error = %e, "page fetch failed, skipping");
                String::new()
            }
        }
    }
}
