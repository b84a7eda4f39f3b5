//! Remote inference provider.
//!
//! Talks JSON to a hosted model service: `/embed` for sentence vectors,
//! `/classify` for claim-versus-sentence entailment. Without a configured
//! endpoint the provider reports itself unavailable and the chain (or the
//! selector's empty-evidence path) takes over.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use verity_core::config::OracleConfig;
use verity_core::errors::{OracleError, VerityResult};
use verity_core::models::{EntailmentJudgment, Polarity};
use verity_core::traits::IScoringOracle;

/// Request body for `/embed`.
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
}

/// Response body from `/embed`.
#[derive(Debug, Deserialize)]
struct EmbedResponse {
    vectors: Vec<Vec<f32>>,
}

/// Request body for `/classify`.
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    claim: &'a str,
    sentences: &'a [String],
}

/// Response body from `/classify`.
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    judgments: Vec<WireJudgment>,
}

/// One judgment as the service reports it.
#[derive(Debug, Deserialize)]
struct WireJudgment {
    label: String,
    score: f64,
}

impl WireJudgment {
    /// Case-insensitive label mapping; unknown labels become Neutral.
    fn into_judgment(self) -> EntailmentJudgment {
        let polarity = match self.label.to_lowercase().as_str() {
            "entailment" | "entail" => Polarity::Entail,
            "contradiction" | "contradict" => Polarity::Contradict,
            _ => Polarity::Neutral,
        };
        EntailmentJudgment {
            polarity,
            score: self.score,
        }
    }
}

/// HTTP-backed scoring oracle.
pub struct RemoteOracle {
    client: reqwest::Client,
    endpoint: Option<String>,
    dimensions: usize,
}

impl RemoteOracle {
    pub fn new(config: &OracleConfig) -> VerityResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OracleError::InferenceFailed {
                reason: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            dimensions: config.dimensions,
        })
    }

    fn endpoint(&self) -> VerityResult<&str> {
        self.endpoint
            .as_deref()
            .ok_or_else(|| OracleError::MissingEndpoint.into())
    }

    async fn post_json<B: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> VerityResult<R> {
        let base = self.endpoint()?;
        let url = format!("{}/{}", base.trim_end_matches('/'), path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| OracleError::InferenceFailed {
                reason: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| OracleError::InferenceFailed {
                reason: e.to_string(),
            })?;

        response
            .json::<R>()
            .await
            .map_err(|e| OracleError::MalformedResponse {
                reason: e.to_string(),
            })
            .map_err(Into::into)
    }
}

#[async_trait]
impl IScoringOracle for RemoteOracle {
    async fn embed_batch(&self, texts: &[String]) -> VerityResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response: EmbedResponse = self.post_json("embed", &EmbedRequest { texts }).await?;
        if response.vectors.len() != texts.len() {
            return Err(OracleError::MalformedResponse {
                reason: format!(
                    "expected {} vectors, got {}",
                    texts.len(),
                    response.vectors.len()
                ),
            }
            .into());
        }

        debug!(count = texts.len(), "remote embed complete");
        Ok(response.vectors)
    }

    async fn classify_batch(
        &self,
        claim: &str,
        sentences: &[String],
    ) -> VerityResult<Vec<EntailmentJudgment>> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let response: ClassifyResponse = self
            .post_json("classify", &ClassifyRequest { claim, sentences })
            .await?;
        if response.judgments.len() != sentences.len() {
            return Err(OracleError::MalformedResponse {
                reason: format!(
                    "expected {} judgments, got {}",
                    sentences.len(),
                    response.judgments.len()
                ),
            }
            .into());
        }

        Ok(response
            .judgments
            .into_iter()
            .map(WireJudgment::into_judgment)
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "remote-oracle"
    }

    fn is_available(&self) -> bool {
        self.endpoint.is_some()
    }
}
