//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use huddle_core::event::{Event, EventSummary, Rsvp, RsvpWithUser, UpsertOutcome, User};
use huddle_core::storage::{
    EventRepository, RepositoryError, Result, RsvpRepository, StoreHealth, UserRepository,
};

use super::conversions::{
    format_datetime, row_to_event_summary, row_to_rsvp, row_to_rsvp_with_user, row_to_user,
};
use super::error::{is_foreign_key_violation, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository backing every store trait.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_string();
        let email_for_err = email.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_EMAIL)
                    .map_err(wrap_err)?;
                match stmt.query_row([&email], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", email_for_err))
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let id = user.id.to_string();
        let name = user.name.clone();
        let email = user.email.clone();
        let created_at = format_datetime(&user.created_at);
        let updated_at = format_datetime(&user.updated_at);
        let email_for_err = user.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    [&id, &name, &email, &created_at, &updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", email_for_err))
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let id = user.id.to_string();
        let name = user.name.clone();
        let email = user.email.clone();
        let updated_at = format_datetime(&user.updated_at);
        let user_id = user.id;

        let rows_affected = self
            .conn
            .call(move |conn| {
                conn.execute(schema::UPDATE_USER, [&id, &name, &email, &updated_at])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", user_id))?;

        if rows_affected == 0 {
            return Err(RepositoryError::not_found("User", user_id));
        }
        Ok(())
    }
}

// ============================================================================
// EventRepository implementation
// ============================================================================

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<EventSummary>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_EVENT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_event_summary) {
                    Ok(event) => Ok(Some(event)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", id))
    }

    async fn list_events(&self) -> Result<Vec<EventSummary>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_EVENTS).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([], row_to_event_summary)
                    .map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok(events)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", "*"))
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let id = event.id.to_string();
        let title = event.title.clone();
        let description = event.description.clone();
        let date = format_datetime(&event.date);
        let created_by = event.created_by.to_string();
        let created_at = format_datetime(&event.created_at);
        let event_id = event.id;

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    [&id, &title, &description, &date, &created_by, &created_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", event_id))
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        let rows_affected = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_EVENT, [&id_str])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event", id))?;

        if rows_affected == 0 {
            return Err(RepositoryError::not_found("Event", id));
        }
        Ok(())
    }
}

// ============================================================================
// RsvpRepository implementation
// ============================================================================

#[async_trait]
impl RsvpRepository for SqliteRepository {
    async fn upsert_rsvp(&self, rsvp: &Rsvp) -> Result<UpsertOutcome<Rsvp>> {
        let id = rsvp.id.to_string();
        let event_id = rsvp.event_id.to_string();
        let user_id = rsvp.user_id.to_string();
        let response = rsvp.response.as_str().to_string();
        let created_at = format_datetime(&rsvp.created_at);
        let proposed_id = rsvp.id;
        let target_event = rsvp.event_id;

        let stored = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::UPSERT_RSVP).map_err(wrap_err)?;
                stmt.query_row(
                    [&id, &event_id, &user_id, &response, &created_at],
                    row_to_rsvp,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| {
                // The event vanished between the caller's existence check and this write
                if is_foreign_key_violation(&e) {
                    RepositoryError::not_found("Event", target_event)
                } else {
                    map_tokio_rusqlite_error(e, "Rsvp", proposed_id)
                }
            })?;

        if stored.id == proposed_id {
            Ok(UpsertOutcome::Created(stored))
        } else {
            Ok(UpsertOutcome::Updated(stored))
        }
    }

    async fn list_rsvps_for_event(&self, event_id: Uuid) -> Result<Vec<RsvpWithUser>> {
        let event_id_str = event_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_RSVPS_FOR_EVENT)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&event_id_str], row_to_rsvp_with_user)
                    .map_err(wrap_err)?;

                let mut rsvps = Vec::new();
                for row_result in rows {
                    rsvps.push(row_result.map_err(wrap_err)?);
                }
                Ok(rsvps)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Rsvp", event_id))
    }

    async fn count_rsvps_for_event(&self, event_id: Uuid) -> Result<u64> {
        let event_id_str = event_id.to_string();

        let count: i64 = self
            .conn
            .call(move |conn| {
                conn.query_row(schema::COUNT_RSVPS_FOR_EVENT, [&event_id_str], |row| {
                    row.get(0)
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Rsvp", event_id))?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl StoreHealth for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}
