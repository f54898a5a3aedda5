use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use eventos_auth_types::identity::Identity;
use eventos_core::json::ValidJson;
use eventos_core::path::ValidPath;
use eventos_domain::event_status::EventStatus;
use eventos_domain::id::{EventId, UserId, VenueId};

use crate::domain::types::Event;
use crate::error::EventosServiceError;
use crate::state::AppState;
use crate::usecase::event::{
    CreateEventUseCase, DeleteEventUseCase, EventInput, EventPatch, GetEventUseCase,
    ListEventsUseCase, UpdateEventUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Body of `POST /eventos` and `PUT /eventos/{id}`. `budget` accepts a JSON
/// string or number; `end_time` may be omitted.
#[derive(Deserialize)]
pub struct EventRequest {
    pub venue_id: VenueId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub budget: Decimal,
    #[serde(default)]
    pub status: EventStatus,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl From<EventRequest> for EventInput {
    fn from(body: EventRequest) -> Self {
        Self {
            venue_id: body.venue_id,
            title: body.title,
            description: body.description,
            budget: body.budget,
            status: body.status,
            start_time: body.start_time,
            end_time: body.end_time,
        }
    }
}

/// An absent `end_time` leaves the stored end untouched; `null` clears it.
#[derive(Deserialize)]
pub struct PatchEventRequest {
    pub venue_id: Option<VenueId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub status: Option<EventStatus>,
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "eventos_core::serde::nullable")]
    pub end_time: Option<Option<DateTime<Utc>>>,
}

impl From<PatchEventRequest> for EventPatch {
    fn from(body: PatchEventRequest) -> Self {
        Self {
            venue_id: body.venue_id,
            title: body.title,
            description: body.description,
            budget: body.budget,
            status: body.status,
            start_time: body.start_time,
            end_time: body.end_time,
        }
    }
}

#[derive(Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub owner_id: UserId,
    pub venue_id: VenueId,
    pub title: String,
    pub description: String,
    pub budget: Decimal,
    pub status: EventStatus,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub start_time: DateTime<Utc>,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms_opt")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            owner_id: event.owner_id,
            venue_id: event.venue_id,
            title: event.title,
            description: event.description,
            budget: event.budget,
            status: event.status,
            start_time: event.start_time,
            end_time: event.end_time,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

// ── GET /eventos ─────────────────────────────────────────────────────────────

pub async fn list_events(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, EventosServiceError> {
    let usecase = ListEventsUseCase {
        repo: state.event_repo(),
    };
    let events = usecase.execute(identity.user_id).await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

// ── POST /eventos ────────────────────────────────────────────────────────────

pub async fn create_event(
    identity: Identity,
    State(state): State<AppState>,
    ValidJson(body): ValidJson<EventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), EventosServiceError> {
    let usecase = CreateEventUseCase {
        events: state.event_repo(),
        venues: state.venue_repo(),
    };
    let event = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

// ── GET /eventos/{id} ────────────────────────────────────────────────────────

pub async fn get_event(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<EventId>,
) -> Result<Json<EventResponse>, EventosServiceError> {
    let usecase = GetEventUseCase {
        repo: state.event_repo(),
    };
    let event = usecase.execute(identity.user_id, id).await?;
    Ok(Json(event.into()))
}

// ── PUT /eventos/{id} ────────────────────────────────────────────────────────

pub async fn replace_event(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<EventId>,
    ValidJson(body): ValidJson<EventRequest>,
) -> Result<Json<EventResponse>, EventosServiceError> {
    let usecase = UpdateEventUseCase {
        events: state.event_repo(),
        venues: state.venue_repo(),
    };
    let patch = EventPatch::from(EventInput::from(body));
    let event = usecase.execute(identity.user_id, id, patch).await?;
    Ok(Json(event.into()))
}

// ── PATCH /eventos/{id} ──────────────────────────────────────────────────────

pub async fn patch_event(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<EventId>,
    ValidJson(body): ValidJson<PatchEventRequest>,
) -> Result<Json<EventResponse>, EventosServiceError> {
    let usecase = UpdateEventUseCase {
        events: state.event_repo(),
        venues: state.venue_repo(),
    };
    let event = usecase.execute(identity.user_id, id, body.into()).await?;
    Ok(Json(event.into()))
}

// ── DELETE /eventos/{id} ─────────────────────────────────────────────────────

pub async fn delete_event(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<EventId>,
) -> Result<StatusCode, EventosServiceError> {
    let usecase = DeleteEventUseCase {
        repo: state.event_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
