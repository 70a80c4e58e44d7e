//! API request types for event operations.
//!
//! Shared between the server and the client. Each request converts into its
//! validated counterpart with `validate`, so the service only ever sees
//! well-formed input.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{NewEvent, NewRsvp, RsvpResponse};
use super::validation::{parse_event_date, validate_description, validate_identity, validate_title};

/// Request payload for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    /// RFC 3339 timestamp.
    pub date: String,
    pub user_name: String,
    pub user_email: String,
}

impl CreateEventRequest {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        user_name: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date: date.into(),
            user_name: user_name.into(),
            user_email: user_email.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(self) -> Result<NewEvent, ValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        let date = parse_event_date(&self.date)?;
        let creator = validate_identity(&self.user_name, &self.user_email)?;

        Ok(NewEvent {
            title: self.title,
            description: self.description,
            date,
            creator,
        })
    }
}

/// Request payload for submitting an RSVP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRsvpRequest {
    pub user_name: String,
    pub user_email: String,
    pub response: RsvpResponse,
}

impl SubmitRsvpRequest {
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        response: RsvpResponse,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
            response,
        }
    }

    pub fn validate(self) -> Result<NewRsvp, ValidationError> {
        let identity = validate_identity(&self.user_name, &self.user_email)?;
        Ok(NewRsvp {
            identity,
            response: self.response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_create_event_request_deserializes_camel_case() {
        let json = r#"{
            "title": "Standup",
            "description": "Daily sync",
            "date": "2025-01-10T09:00:00Z",
            "userName": "Alice",
            "userEmail": "alice@x.com"
        }"#;
        let request: CreateEventRequest = serde_json::from_str(json).unwrap();
        let new_event = request.validate().unwrap();

        assert_eq!(new_event.title, "Standup");
        assert_eq!(new_event.description, "Daily sync");
        assert_eq!(
            new_event.date,
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
        );
        assert_eq!(new_event.creator.email, "alice@x.com");
        assert_eq!(new_event.creator.name, "Alice");
    }

    #[test]
    fn test_create_event_request_requires_description() {
        let json = r#"{"title":"T","date":"2025-01-10T09:00:00Z","userName":"A","userEmail":"a@x.com"}"#;
        assert!(serde_json::from_str::<CreateEventRequest>(json).is_err());

        let json = r#"{"title":"T","description":"","date":"2025-01-10T09:00:00Z","userName":"A","userEmail":"a@x.com"}"#;
        let request: CreateEventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_create_event_request_rejects_each_invalid_field() {
        let base = || CreateEventRequest::new("Standup", "2025-01-10T09:00:00Z", "Alice", "alice@x.com");

        let mut request = base();
        request.title = String::new();
        assert_eq!(request.validate(), Err(ValidationError::EmptyTitle));

        let request = base().with_description("x".repeat(1001));
        assert_eq!(request.validate(), Err(ValidationError::DescriptionTooLong));

        let mut request = base();
        request.date = "tomorrow".to_string();
        assert!(matches!(request.validate(), Err(ValidationError::InvalidDate(_))));

        let mut request = base();
        request.user_email = "alice".to_string();
        assert!(matches!(request.validate(), Err(ValidationError::InvalidEmail(_))));

        let mut request = base();
        request.user_name = String::new();
        assert_eq!(request.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_submit_rsvp_request_rejects_unknown_response() {
        let json = r#"{"userName":"A","userEmail":"a@x.com","response":"perhaps"}"#;
        assert!(serde_json::from_str::<SubmitRsvpRequest>(json).is_err());
    }

    #[test]
    fn test_submit_rsvp_request_validate() {
        let new_rsvp = SubmitRsvpRequest::new("Alice", "alice@x.com", RsvpResponse::Going)
            .validate()
            .unwrap();
        assert_eq!(new_rsvp.response, RsvpResponse::Going);
        assert_eq!(new_rsvp.identity.email, "alice@x.com");
    }
}
