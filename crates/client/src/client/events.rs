//! Event API operations.

use serde::Deserialize;
use uuid::Uuid;

use huddle_core::event::{CreateEventRequest, Event, EventSummary};

use super::HuddleClient;
use crate::error::{ClientError, Result};

/// Body of a successful delete.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl HuddleClient {
    /// List all events, ascending by date.
    pub async fn list_events(&self) -> Result<Vec<EventSummary>> {
        let response = self.client.get(self.url("/api/events")).send().await?;
        self.handle_response(response).await
    }

    /// Get an event with its RSVP count.
    pub async fn get_event(&self, id: Uuid) -> Result<EventSummary> {
        let response = self
            .client
            .get(self.url(&format!("/api/events/{id}")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create an event. The request is validated locally before it is sent.
    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<Event> {
        req.clone()
            .validate()
            .map_err(|e| ClientError::InvalidInput(e.to_string()))?;

        let response = self
            .client
            .post(self.url("/api/events"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete an event and its RSVPs.
    pub async fn delete_event(&self, id: Uuid) -> Result<DeleteResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/api/events/{id}")))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
