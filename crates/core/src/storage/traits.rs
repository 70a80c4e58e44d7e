use async_trait::async_trait;
use uuid::Uuid;

use crate::event::{Event, EventSummary, Rsvp, RsvpWithUser, UpsertOutcome, User};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their email address.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a new user.
    ///
    /// Fails with `AlreadyExists` when the email is taken.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Updates an existing user.
    async fn update_user(&self, user: &User) -> Result<()>;
}

/// Repository for event operations.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event with its RSVP count.
    async fn get_event(&self, id: Uuid) -> Result<Option<EventSummary>>;

    /// Lists all events with their RSVP counts, ascending by date.
    async fn list_events(&self) -> Result<Vec<EventSummary>>;

    /// Creates a new event.
    async fn create_event(&self, event: &Event) -> Result<()>;

    /// Deletes an event and, by cascade, its RSVPs.
    ///
    /// Fails with `NotFound` when no such event exists.
    async fn delete_event(&self, id: Uuid) -> Result<()>;
}

/// Repository for RSVP operations.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Inserts the RSVP, or overwrites the response of the existing one for
    /// the same (event, user) pair, in a single conditional write.
    ///
    /// On update the stored ID and creation timestamp are kept. Fails with
    /// `NotFound` when the event does not exist.
    async fn upsert_rsvp(&self, rsvp: &Rsvp) -> Result<UpsertOutcome<Rsvp>>;

    /// Lists the RSVPs of an event joined with their users, newest first.
    async fn list_rsvps_for_event(&self, event_id: Uuid) -> Result<Vec<RsvpWithUser>>;

    /// Counts the RSVPs of an event.
    async fn count_rsvps_for_event(&self, event_id: Uuid) -> Result<u64>;
}

/// Reachability probe for the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

/// Combined trait for stores that back every repository.
pub trait Store: UserRepository + EventRepository + RsvpRepository + StoreHealth {}

impl<T: UserRepository + EventRepository + RsvpRepository + StoreHealth> Store for T {}
