use chrono::{DateTime, Utc};

use super::error::ValidationError;
use super::types::Identity;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Validates an event title: 1 to 200 characters.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Validates an event description: at most 1000 characters, may be empty.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
pub fn parse_event_date(date: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(date.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| ValidationError::InvalidDate(format!("{date}: {e}")))
}

/// Checks the shape `local@domain.tld` without whitespace.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

/// Validates a (name, email) pair and returns it as an [`Identity`].
pub fn validate_identity(name: &str, email: &str) -> Result<Identity, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    validate_email(email)?;
    Ok(Identity {
        email: email.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_title_bounds() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert!(validate_title("   ").is_ok());
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"a".repeat(200)).is_ok());
        assert_eq!(
            validate_title(&"a".repeat(201)),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        assert!(validate_title(&"é".repeat(200)).is_ok());
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(1000)).is_ok());
        assert_eq!(
            validate_description(&"d".repeat(1001)),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_parse_event_date_normalizes_to_utc() {
        let parsed = parse_event_date("2025-01-10T10:00:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap());

        let zulu = parse_event_date("2025-01-10T09:00:00Z").unwrap();
        assert_eq!(zulu, parsed);
    }

    #[test]
    fn test_parse_event_date_rejects_garbage() {
        assert!(matches!(
            parse_event_date("next tuesday"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(parse_event_date("2025-01-10").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@x.com").is_ok());
        assert!(validate_email("a.b+tag@mail.example.org").is_ok());

        for bad in ["", "alice", "@x.com", "alice@", "alice@x", "a b@x.com", "a@b@c.com", "a@x..com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_validate_identity() {
        let identity = validate_identity("Alice", "alice@x.com").unwrap();
        assert_eq!(identity.name, "Alice");
        assert_eq!(identity.email, "alice@x.com");

        assert_eq!(
            validate_identity("", "alice@x.com"),
            Err(ValidationError::EmptyName)
        );
        assert!(validate_identity(" ", "alice@x.com").is_ok());
        assert!(matches!(
            validate_identity("Alice", "nope"),
            Err(ValidationError::InvalidEmail(_))
        ));
    }
}
