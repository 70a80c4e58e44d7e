//! RSVP handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use huddle_core::event::{RsvpCount, RsvpWithUser, SubmitRsvpRequest};

use super::events::{event_id, malformed_body};
use crate::{handlers::AppError, state::AppState};

/// POST /api/events/{id}/rsvp
///
/// Answers 201 whether the RSVP was created or an earlier one overwritten.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<SubmitRsvpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RsvpWithUser>), AppError> {
    let id = event_id(path)?;
    let Json(request) = payload.map_err(malformed_body)?;

    let outcome = state.events.submit_rsvp(id, request).await?;
    Ok((StatusCode::CREATED, Json(outcome.into_inner())))
}

/// GET /api/events/{id}/rsvps
pub async fn list_rsvps(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<RsvpWithUser>>, AppError> {
    let id = event_id(path)?;
    Ok(Json(state.events.list_rsvps(id).await?))
}

/// GET /api/events/{id}/rsvp-count
pub async fn rsvp_count(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<RsvpCount>, AppError> {
    let id = event_id(path)?;
    Ok(Json(state.events.rsvp_count(id).await?))
}
