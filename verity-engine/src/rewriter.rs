//! Explanation rewriters.
//!
//! The rewriter seam is strictly best-effort: the remote variant returns
//! its input on any failure, and without a configured endpoint the
//! engine gets the no-op variant. A verification can never fail because
//! polishing did.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use verity_core::config::RewriterConfig;
use verity_core::constants::MIN_REWRITE_CHARS;
use verity_core::errors::{VerityError, VerityResult};
use verity_core::traits::ITextRewriter;

/// Pass-through rewriter used when no endpoint is configured.
pub struct NoopRewriter;

#[async_trait]
impl ITextRewriter for NoopRewriter {
    async fn rewrite(&self, text: &str) -> String {
        text.to_string()
    }

    fn name(&self) -> &str {
        "noop-rewriter"
    }
}

/// Request body for `/rewrite`.
#[derive(Debug, Serialize)]
struct RewriteRequest<'a> {
    text: &'a str,
}

/// Response body from `/rewrite`.
#[derive(Debug, Deserialize)]
struct RewriteResponse {
    text: String,
}

/// HTTP-backed rewriter for a hosted summarization service.
pub struct RemoteRewriter {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteRewriter {
    pub fn new(endpoint: String, timeout_secs: u64) -> VerityResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| VerityError::Config {
                reason: format!("rewriter client setup failed: {e}"),
            })?;
        Ok(Self { client, endpoint })
    }

    async fn try_rewrite(&self, text: &str) -> Result<String, reqwest::Error> {
        let url = format!("{}/rewrite", self.endpoint.trim_end_matches('/'));
        let response: RewriteResponse = self
            .client
            .post(&url)
            .json(&RewriteRequest { text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.text)
    }
}

#[async_trait]
impl ITextRewriter for RemoteRewriter {
    async fn rewrite(&self, text: &str) -> String {
        // Too short to be worth a round trip.
        if text.trim().chars().count() < MIN_REWRITE_CHARS {
            return text.to_string();
        }
        match self.try_rewrite(text).await {
            Ok(polished) if !polished.trim().is_empty() => polished,
            Ok(_) => {
                debug!("rewriter returned empty text, keeping original");
                text.to_string()
            }
            Err(e) => {
                debug!(error = %e, "rewrite failed, keeping original");
                text.to_string()
            }
        }
    }

    fn name(&self) -> &str {
        "remote-rewriter"
    }
}

/// Pick the rewriter the config asks for.
pub fn create_rewriter(config: &RewriterConfig) -> VerityResult<Arc<dyn ITextRewriter>> {
    match &config.endpoint {
        Some(endpoint) => Ok(Arc::new(RemoteRewriter::new(
            endpoint.clone(),
            config.timeout_secs,
        )?)),
        None => Ok(Arc::new(NoopRewriter)),
    }
}
