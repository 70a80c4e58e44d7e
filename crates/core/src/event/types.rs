use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person known by email. Created on first reference, renamed in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this user carrying a new display name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

/// A validated (email, display name) pair used to resolve a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

/// A planned event. Only ever created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event owned by `created_by`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            date,
            created_by,
            created_at: Utc::now(),
        }
    }
}

/// An event together with its RSVP count, as served by list and get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(flatten)]
    pub event: Event,
    pub rsvp_count: u64,
}

/// Attendance answer. Any value may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpResponse {
    Going,
    NotGoing,
    Maybe,
}

impl RsvpResponse {
    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpResponse::Going => "going",
            RsvpResponse::NotGoing => "not_going",
            RsvpResponse::Maybe => "maybe",
        }
    }
}

impl std::fmt::Display for RsvpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RsvpResponse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "going" => Ok(RsvpResponse::Going),
            "not_going" => Ok(RsvpResponse::NotGoing),
            "maybe" => Ok(RsvpResponse::Maybe),
            other => Err(format!("unknown RSVP response: {other}")),
        }
    }
}

/// One user's answer for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub response: RsvpResponse,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    /// Creates a new RSVP with a fresh ID.
    pub fn new(event_id: Uuid, user_id: Uuid, response: RsvpResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            response,
            created_at: Utc::now(),
        }
    }
}

/// An RSVP joined with the user who submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpWithUser {
    #[serde(flatten)]
    pub rsvp: Rsvp,
    pub user: User,
}

/// Derived number of RSVPs for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpCount {
    pub event_id: Uuid,
    pub count: u64,
}

/// Validated input for event creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub creator: Identity,
}

/// Validated input for RSVP submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    pub identity: Identity,
    pub response: RsvpResponse,
}

/// Result of a conditional write keyed by a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome<T> {
    Created(T),
    Updated(T),
}

impl<T> UpsertOutcome<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, UpsertOutcome::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            UpsertOutcome::Created(value) | UpsertOutcome::Updated(value) => value,
        }
    }

    /// Transforms the carried value, keeping the outcome tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> UpsertOutcome<U> {
        match self {
            UpsertOutcome::Created(value) => UpsertOutcome::Created(f(value)),
            UpsertOutcome::Updated(value) => UpsertOutcome::Updated(f(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event() -> Event {
        Event::new(
            "Standup",
            "Daily sync",
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_event_summary_serializes_flat_with_camel_case() {
        let summary = EventSummary {
            event: sample_event(),
            rsvp_count: 3,
        };
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["title"], "Standup");
        assert_eq!(json["rsvpCount"], 3);
        assert!(json.get("createdBy").is_some());
        assert!(json.get("event").is_none());
    }

    #[test]
    fn test_event_summary_json_roundtrip() {
        let summary = EventSummary {
            event: sample_event(),
            rsvp_count: 0,
        };
        let bytes = serde_json::to_vec(&summary).unwrap();
        let back: EventSummary = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_rsvp_response_wire_names() {
        assert_eq!(
            serde_json::to_string(&RsvpResponse::NotGoing).unwrap(),
            "\"not_going\""
        );
        assert_eq!("maybe".parse::<RsvpResponse>(), Ok(RsvpResponse::Maybe));
        assert!("yes".parse::<RsvpResponse>().is_err());
    }

    #[test]
    fn test_user_renamed_keeps_identity() {
        let user = User::new("Alice", "alice@x.com");
        let renamed = user.renamed("Alice B.");

        assert_eq!(renamed.id, user.id);
        assert_eq!(renamed.email, user.email);
        assert_eq!(renamed.created_at, user.created_at);
        assert_eq!(renamed.name, "Alice B.");
    }

    #[test]
    fn test_upsert_outcome_map_keeps_tag() {
        let outcome = UpsertOutcome::Updated(2).map(|n| n * 10);
        assert!(!outcome.is_created());
        assert_eq!(outcome.into_inner(), 20);
    }
}
