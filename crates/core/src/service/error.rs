use thiserror::Error;

use crate::cache::{cache_error_to_status_code, CacheError};
use crate::event::ValidationError;
use crate::storage::{repository_error_to_status_code, RepositoryError};

/// Failure of a service operation.
///
/// A repository `NotFound` is lifted into [`ServiceError::NotFound`] so every
/// absent entity renders the same way, whichever layer noticed it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity_type} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error(transparent)]
    Repository(RepositoryError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl ServiceError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity_type, id } => {
                ServiceError::NotFound { entity_type, id }
            }
            other => ServiceError::Repository(other),
        }
    }
}

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Repository` -> see [`repository_error_to_status_code`]
/// - `Cache` -> see [`cache_error_to_status_code`]
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::Validation(_) => 400,
        ServiceError::NotFound { .. } => 404,
        ServiceError::Repository(err) => repository_error_to_status_code(err),
        ServiceError::Cache(err) => cache_error_to_status_code(err),
    }
}
