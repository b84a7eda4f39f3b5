/// Web-search provider errors.
///
/// A failed search is always distinct from a search that returned zero
/// results; the latter is an `Ok(vec![])` at the provider boundary.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("missing search credential: {name}")]
    MissingCredentials { name: String },

    #[error("search request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("search returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("malformed search response: {reason}")]
    MalformedResponse { reason: String },
}
