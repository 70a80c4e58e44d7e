//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use huddle_core::event::{Event, EventSummary, Rsvp, RsvpWithUser, UpsertOutcome, User};
use huddle_core::storage::{
    EventRepository, RepositoryError, Result, RsvpRepository, StoreHealth, UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    events: HashMap<Uuid, Event>,
    rsvps: HashMap<Uuid, Rsvp>,
}

impl Tables {
    fn summarize(&self, event: &Event) -> EventSummary {
        let rsvp_count = self.count_for(event.id);
        EventSummary {
            event: event.clone(),
            rsvp_count,
        }
    }

    fn count_for(&self, event_id: Uuid) -> u64 {
        self.rsvps
            .values()
            .filter(|r| r.event_id == event_id)
            .count() as u64
    }
}

/// In-memory storage backend.
///
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|u| u.id == user.id || u.email == user.email)
        {
            return Err(RepositoryError::already_exists("User", &user.email));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("User", user.id)),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<EventSummary>> {
        let tables = self.tables.read().await;
        Ok(tables.events.get(&id).map(|event| tables.summarize(event)))
    }

    async fn list_events(&self) -> Result<Vec<EventSummary>> {
        let tables = self.tables.read().await;
        let mut events: Vec<EventSummary> = tables
            .events
            .values()
            .map(|event| tables.summarize(event))
            .collect();
        events.sort_by(|a, b| {
            a.event
                .date
                .cmp(&b.event.date)
                .then_with(|| a.event.created_at.cmp(&b.event.created_at))
        });
        Ok(events)
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.events.contains_key(&event.id) {
            return Err(RepositoryError::already_exists("Event", event.id));
        }
        if !tables.users.contains_key(&event.created_by) {
            return Err(RepositoryError::InvalidData(format!(
                "unknown creator {}",
                event.created_by
            )));
        }
        tables.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.events.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Event", id));
        }
        tables.rsvps.retain(|_, rsvp| rsvp.event_id != id);
        Ok(())
    }
}

#[async_trait]
impl RsvpRepository for InMemoryRepository {
    async fn upsert_rsvp(&self, rsvp: &Rsvp) -> Result<UpsertOutcome<Rsvp>> {
        let mut tables = self.tables.write().await;

        if !tables.events.contains_key(&rsvp.event_id) {
            return Err(RepositoryError::not_found("Event", rsvp.event_id));
        }
        if !tables.users.contains_key(&rsvp.user_id) {
            return Err(RepositoryError::InvalidData(format!(
                "unknown user {}",
                rsvp.user_id
            )));
        }

        let existing = tables
            .rsvps
            .values_mut()
            .find(|r| r.event_id == rsvp.event_id && r.user_id == rsvp.user_id);

        match existing {
            Some(stored) => {
                stored.response = rsvp.response;
                Ok(UpsertOutcome::Updated(stored.clone()))
            }
            None => {
                tables.rsvps.insert(rsvp.id, rsvp.clone());
                Ok(UpsertOutcome::Created(rsvp.clone()))
            }
        }
    }

    async fn list_rsvps_for_event(&self, event_id: Uuid) -> Result<Vec<RsvpWithUser>> {
        let tables = self.tables.read().await;
        let mut rsvps: Vec<RsvpWithUser> = tables
            .rsvps
            .values()
            .filter(|r| r.event_id == event_id)
            .filter_map(|r| {
                tables.users.get(&r.user_id).map(|user| RsvpWithUser {
                    rsvp: r.clone(),
                    user: user.clone(),
                })
            })
            .collect();
        rsvps.sort_by(|a, b| b.rsvp.created_at.cmp(&a.rsvp.created_at));
        Ok(rsvps)
    }

    async fn count_rsvps_for_event(&self, event_id: Uuid) -> Result<u64> {
        let tables = self.tables.read().await;
        Ok(tables.count_for(event_id))
    }
}

#[async_trait]
impl StoreHealth for InMemoryRepository {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
