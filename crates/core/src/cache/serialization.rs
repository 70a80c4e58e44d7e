//! Pure functions for serializing/deserializing cached projections.
//!
//! Cache values are JSON so they stay human-readable when inspected with
//! `redis-cli` or a debugger.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a value to JSON bytes.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a value.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventSummary};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn summary(title: &str, rsvp_count: u64) -> EventSummary {
        EventSummary {
            event: Event::new(
                title,
                "",
                Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
                Uuid::new_v4(),
            ),
            rsvp_count,
        }
    }

    #[test]
    fn test_roundtrip_event_list() {
        let events = vec![summary("One", 0), summary("Two", 5)];

        let bytes = serialize(&events).expect("serialize should succeed");
        let back: Vec<EventSummary> = deserialize(&bytes).expect("deserialize should succeed");

        assert_eq!(back, events);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let result = deserialize::<EventSummary>(b"not valid json");
        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        let bytes = serialize(&summary("One", 1)).unwrap();
        let result = deserialize::<Vec<EventSummary>>(&bytes);
        assert!(result.is_err());
    }
}
