/// Scoring-oracle errors for embedding and entailment calls.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle provider '{provider}' is not available")]
    ProviderUnavailable { provider: String },

    #[error("no oracle endpoint configured")]
    MissingEndpoint,

    #[error("oracle inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("malformed oracle response: {reason}")]
    MalformedResponse { reason: String },

    #[error("all oracle providers failed, last error: {last_error}")]
    AllProvidersFailed { last_error: String },
}
