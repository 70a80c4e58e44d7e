use thiserror::Error;

/// Errors raised when an inbound payload is rejected before reaching the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Description too long (max 1000 characters)")]
    DescriptionTooLong,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyTitle.to_string(),
            "Title cannot be empty"
        );
        assert_eq!(
            ValidationError::InvalidEmail("bob".to_string()).to_string(),
            "Invalid email: bob"
        );
        assert_eq!(
            ValidationError::MalformedBody("missing field `title`".to_string()).to_string(),
            "Invalid request body: missing field `title`"
        );
    }
}
