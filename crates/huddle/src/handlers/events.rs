//! Event handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::json;
use uuid::Uuid;

use huddle_core::event::{CreateEventRequest, Event, EventSummary, ValidationError};
use huddle_core::service::ServiceError;

use crate::{handlers::AppError, state::AppState};

/// A body that does not parse is a validation failure.
pub(super) fn malformed_body(rejection: JsonRejection) -> AppError {
    ValidationError::MalformedBody(rejection.body_text()).into()
}

/// An id that is not a UUID names no event.
pub(super) fn event_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Unparseable event id");
        ServiceError::not_found("Event", "invalid id").into()
    })
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let Json(request) = payload.map_err(malformed_body)?;
    let event = state.events.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    Ok(Json(state.events.list_events().await?))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<EventSummary>, AppError> {
    let id = event_id(path)?;
    Ok(Json(state.events.get_event(id).await?))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = event_id(path)?;
    state.events.delete_event(id).await?;
    Ok(Json(json!({ "message": "Event deleted successfully" })))
}
