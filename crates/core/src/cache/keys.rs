use uuid::Uuid;

/// Returns the cache key for the list of all events with their counts.
pub fn events_list_key() -> String {
    "events:list".to_string()
}

/// Returns the cache key for a single event with its count.
pub fn event_key(event_id: Uuid) -> String {
    format!("events:{}", event_id)
}

/// Returns the cache key for the derived RSVP count of an event.
pub fn event_rsvp_count_key(event_id: Uuid) -> String {
    format!("events:{}:rsvp_count", event_id)
}
