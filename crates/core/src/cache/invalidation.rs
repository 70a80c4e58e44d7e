//! Declared cache side effects of each mutation.
//!
//! Every write the service performs is described by a [`Mutation`], and the
//! keys it makes stale are computed here, once, without touching a cache.

use uuid::Uuid;

use super::keys::{event_key, event_rsvp_count_key, events_list_key};

/// A committed store mutation whose cached projections must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    EventCreated,
    RsvpSubmitted { event_id: Uuid },
    EventDeleted { event_id: Uuid },
}

impl Mutation {
    /// Returns every cache key that may be stale after this mutation.
    pub fn invalidated_keys(&self) -> Vec<String> {
        match self {
            Mutation::EventCreated => vec![events_list_key()],
            Mutation::RsvpSubmitted { event_id } | Mutation::EventDeleted { event_id } => vec![
                event_key(*event_id),
                events_list_key(),
                event_rsvp_count_key(*event_id),
            ],
        }
    }
}
