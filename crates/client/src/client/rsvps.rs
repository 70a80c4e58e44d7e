//! RSVP API operations.

use uuid::Uuid;

use huddle_core::event::{RsvpCount, RsvpWithUser, SubmitRsvpRequest};

use super::HuddleClient;
use crate::error::{ClientError, Result};

impl HuddleClient {
    /// Submit or replace the caller's RSVP for an event.
    pub async fn submit_rsvp(&self, event_id: Uuid, req: &SubmitRsvpRequest) -> Result<RsvpWithUser> {
        req.clone()
            .validate()
            .map_err(|e| ClientError::InvalidInput(e.to_string()))?;

        let response = self
            .client
            .post(self.url(&format!("/api/events/{event_id}/rsvp")))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List the RSVPs of an event, newest first.
    pub async fn list_rsvps(&self, event_id: Uuid) -> Result<Vec<RsvpWithUser>> {
        let response = self
            .client
            .get(self.url(&format!("/api/events/{event_id}/rsvps")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn rsvp_count(&self, event_id: Uuid) -> Result<RsvpCount> {
        let response = self
            .client
            .get(self.url(&format!("/api/events/{event_id}/rsvp-count")))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
