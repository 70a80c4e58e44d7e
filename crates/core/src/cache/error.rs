use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Maps a [`CacheError`] to an HTTP status code.
///
/// Only reached when the cache fault policy is `fail`.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `OperationFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
pub fn cache_error_to_status_code(error: &CacheError) -> u16 {
    match error {
        CacheError::ConnectionFailed(_) => 503,
        CacheError::OperationFailed(_) => 500,
        CacheError::Serialization(_) => 500,
    }
}
