//! Event and RSVP operations.
//!
//! Every operation follows the same order: validate the input, check the
//! event exists where one is named, resolve the caller's identity, mutate the
//! store, then invalidate the cache keys the mutation declares. Invalidation
//! only ever follows a committed mutation.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use huddle_core::cache::{event_key, event_rsvp_count_key, events_list_key, Mutation};
use huddle_core::event::{
    CreateEventRequest, Event, EventSummary, Rsvp, RsvpCount, RsvpWithUser, SubmitRsvpRequest,
    UpsertOutcome,
};
use huddle_core::service::{HealthReport, ServiceError};
use huddle_core::storage::{EventRepository, RsvpRepository, Store, StoreHealth};

use super::identity::IdentityResolver;
use crate::cache::ReadThroughCache;

type Result<T> = std::result::Result<T, ServiceError>;

async fn find_event(store: &dyn Store, id: Uuid) -> Result<EventSummary> {
    store
        .get_event(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event", id))
}

async fn list_all(store: &dyn Store) -> Result<Vec<EventSummary>> {
    Ok(store.list_events().await?)
}

async fn count_for(store: &dyn Store, event_id: Uuid) -> Result<RsvpCount> {
    find_event(store, event_id).await?;
    let count = store.count_rsvps_for_event(event_id).await?;
    Ok(RsvpCount { event_id, count })
}

/// Service façade composing the store, the identity resolver and the
/// read-through cache.
pub struct EventService {
    store: Arc<dyn Store>,
    cache: ReadThroughCache,
}

impl EventService {
    pub fn new(store: Arc<dyn Store>, cache: ReadThroughCache) -> Self {
        Self { store, cache }
    }

    fn identities(&self) -> IdentityResolver<'_, dyn Store> {
        IdentityResolver::new(self.store.as_ref())
    }

    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let new_event = request.validate()?;
        let creator = self.identities().resolve(&new_event.creator).await?;

        let event = Event::new(
            new_event.title,
            new_event.description,
            new_event.date,
            creator.id,
        );
        self.store.create_event(&event).await?;
        tracing::info!(event_id = %event.id, title = %event.title, "Event created");

        self.cache.invalidate(Mutation::EventCreated).await?;
        Ok(event)
    }

    /// All events with their RSVP counts, ascending by date.
    pub async fn list_events(&self) -> Result<Vec<EventSummary>> {
        let store = self.store.as_ref();
        self.cache
            .get_or_fetch(&events_list_key(), move || list_all(store))
            .await
    }

    /// A single event with its RSVP count. Absent events are never cached.
    pub async fn get_event(&self, id: Uuid) -> Result<EventSummary> {
        let store = self.store.as_ref();
        self.cache
            .get_or_fetch(&event_key(id), move || find_event(store, id))
            .await
    }

    /// Deletes an event and its RSVPs. An unknown id invalidates nothing.
    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.store.delete_event(id).await?;
        tracing::info!(event_id = %id, "Event deleted");

        self.cache
            .invalidate(Mutation::EventDeleted { event_id: id })
            .await?;
        Ok(())
    }

    /// Records the caller's response, replacing any earlier one for the same
    /// event.
    pub async fn submit_rsvp(
        &self,
        event_id: Uuid,
        request: SubmitRsvpRequest,
    ) -> Result<UpsertOutcome<RsvpWithUser>> {
        let new_rsvp = request.validate()?;
        find_event(self.store.as_ref(), event_id).await?;
        let user = self.identities().resolve(&new_rsvp.identity).await?;

        let outcome = self
            .store
            .upsert_rsvp(&Rsvp::new(event_id, user.id, new_rsvp.response))
            .await?;
        tracing::info!(
            %event_id,
            user_id = %user.id,
            response = %new_rsvp.response,
            created = outcome.is_created(),
            "RSVP recorded"
        );

        self.cache
            .invalidate(Mutation::RsvpSubmitted { event_id })
            .await?;
        Ok(outcome.map(|rsvp| RsvpWithUser { rsvp, user }))
    }

    /// RSVPs of an event with their users, newest first.
    pub async fn list_rsvps(&self, event_id: Uuid) -> Result<Vec<RsvpWithUser>> {
        find_event(self.store.as_ref(), event_id).await?;
        Ok(self.store.list_rsvps_for_event(event_id).await?)
    }

    pub async fn rsvp_count(&self, event_id: Uuid) -> Result<RsvpCount> {
        let store = self.store.as_ref();
        self.cache
            .get_or_fetch(&event_rsvp_count_key(event_id), move || {
                count_for(store, event_id)
            })
            .await
    }

    /// Probes the store and the cache.
    pub async fn health(&self) -> HealthReport {
        let database = self.store.ping().await.map_err(|e| e.to_string());
        let cache = self.cache.ping().await.map_err(|e| e.to_string());

        let report = HealthReport::from_probes(database, cache, Utc::now());
        if let Some(error) = &report.error {
            tracing::warn!(%error, "Health check failed");
        }
        report
    }
}
