//! Event collection endpoints

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, put},
};
use proximo_core::event::{Event, EventDraft};
use proximo_core::protocol::Deleted;
use proximo_core::repository::EventRepository;

use crate::routes::{ApiResult, ok};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/organizer/{identity}", get(list_organizer_events))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
}

/// GET /api/events - Every event
async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    let events = state.repo().list_all().await?;
    ok(events, "Events retrieved")
}

/// GET /api/events/organizer/:identity - Events owned by one organizer
async fn list_organizer_events(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> ApiResult<Vec<Event>> {
    let events = state.repo().list_by_owner(&identity).await?;
    ok(events, "Organizer events retrieved")
}

/// POST /api/events - Create an event
async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> ApiResult<Event> {
    let Json(draft) = payload?;
    let event = state.repo().create(draft).await?;
    tracing::info!(id = %event.id, owner = %event.owner_identity, "event created");
    ok(event, "Event created")
}

/// PUT /api/events/:id - Replace an event's fields
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> ApiResult<Event> {
    let Json(draft) = payload?;
    let event = state.repo().update(&id, draft).await?;
    tracing::info!(%id, "event updated");
    ok(event, "Event updated")
}

/// DELETE /api/events/:id - Remove an event
async fn delete_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Deleted> {
    state.repo().delete(&id).await?;
    tracing::info!(%id, "event deleted");
    ok(Deleted { id }, "Event deleted")
}
