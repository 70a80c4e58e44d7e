//! Status codes for store failures.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// A missing event or user is 404 and a second user with the same email is
/// 409. A reference the store refuses (an event whose creator does not exist)
/// is 400. An unreachable or locked database is 503, and anything the store
/// cannot run or decode is 500.
///
/// ```
/// use huddle_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let missing = RepositoryError::not_found("Event", "0b7c6d1e");
/// assert_eq!(repository_error_to_status_code(&missing), 404);
///
/// let duplicate = RepositoryError::already_exists("User", "alice@x.com");
/// assert_eq!(repository_error_to_status_code(&duplicate), 409);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failures_map_to_statuses() {
        let cases = [
            (RepositoryError::not_found("Event", "evt-1"), 404),
            (RepositoryError::not_found("User", "alice@x.com"), 404),
            (RepositoryError::already_exists("User", "alice@x.com"), 409),
            (
                RepositoryError::InvalidData(
                    "Foreign key constraint violation for Event evt-1".to_string(),
                ),
                400,
            ),
            (RepositoryError::ConnectionFailed("database is locked".to_string()), 503),
            (RepositoryError::QueryFailed("no such table: rsvps".to_string()), 500),
            (RepositoryError::Serialization("invalid RSVP response 'yes'".to_string()), 500),
        ];

        for (error, status) in cases {
            assert_eq!(repository_error_to_status_code(&error), status, "{error}");
        }
    }
}
