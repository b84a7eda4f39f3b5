/// Verdict-cache errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("cache schema setup failed: {reason}")]
    SchemaFailed { reason: String },

    #[error("cache serialization failed: {reason}")]
    SerializationFailed { reason: String },
}
