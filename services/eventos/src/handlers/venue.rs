use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use eventos_auth_types::identity::Identity;
use eventos_core::json::ValidJson;
use eventos_core::path::ValidPath;
use eventos_domain::id::{UserId, VenueId};

use crate::domain::types::Venue;
use crate::error::EventosServiceError;
use crate::state::AppState;
use crate::usecase::venue::{
    CreateVenueUseCase, DeleteVenueUseCase, GetVenueUseCase, ListVenuesUseCase,
    UpdateVenueUseCase, VenueInput, VenuePatch,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Body of `POST /locais` and `PUT /locais/{id}`. There is no owner field;
/// an `owner_id` sent by the client is ignored.
#[derive(Deserialize)]
pub struct VenueRequest {
    pub name: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub capacity: i32,
}

impl From<VenueRequest> for VenueInput {
    fn from(body: VenueRequest) -> Self {
        Self {
            name: body.name,
            street: body.street,
            number: body.number,
            neighborhood: body.neighborhood,
            city: body.city,
            state: body.state,
            postal_code: body.postal_code,
            capacity: body.capacity,
        }
    }
}

#[derive(Deserialize)]
pub struct PatchVenueRequest {
    pub name: Option<String>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub capacity: Option<i32>,
}

impl From<PatchVenueRequest> for VenuePatch {
    fn from(body: PatchVenueRequest) -> Self {
        Self {
            name: body.name,
            street: body.street,
            number: body.number,
            neighborhood: body.neighborhood,
            city: body.city,
            state: body.state,
            postal_code: body.postal_code,
            capacity: body.capacity,
        }
    }
}

#[derive(Serialize)]
pub struct VenueResponse {
    pub id: VenueId,
    pub owner_id: UserId,
    pub name: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub capacity: i32,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Venue> for VenueResponse {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            owner_id: venue.owner_id,
            name: venue.name,
            street: venue.street,
            number: venue.number,
            neighborhood: venue.neighborhood,
            city: venue.city,
            state: venue.state,
            postal_code: venue.postal_code,
            capacity: venue.capacity,
            created_at: venue.created_at,
            updated_at: venue.updated_at,
        }
    }
}

// ── GET /locais ──────────────────────────────────────────────────────────────

pub async fn list_venues(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<VenueResponse>>, EventosServiceError> {
    let usecase = ListVenuesUseCase {
        repo: state.venue_repo(),
    };
    let venues = usecase.execute(identity.user_id).await?;
    Ok(Json(venues.into_iter().map(VenueResponse::from).collect()))
}

// ── POST /locais ─────────────────────────────────────────────────────────────

pub async fn create_venue(
    identity: Identity,
    State(state): State<AppState>,
    ValidJson(body): ValidJson<VenueRequest>,
) -> Result<(StatusCode, Json<VenueResponse>), EventosServiceError> {
    let usecase = CreateVenueUseCase {
        repo: state.venue_repo(),
    };
    let venue = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(venue.into())))
}

// ── GET /locais/{id} ─────────────────────────────────────────────────────────

pub async fn get_venue(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<VenueId>,
) -> Result<Json<VenueResponse>, EventosServiceError> {
    let usecase = GetVenueUseCase {
        repo: state.venue_repo(),
    };
    let venue = usecase.execute(identity.user_id, id).await?;
    Ok(Json(venue.into()))
}

// ── PUT /locais/{id} ─────────────────────────────────────────────────────────

pub async fn replace_venue(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<VenueId>,
    ValidJson(body): ValidJson<VenueRequest>,
) -> Result<Json<VenueResponse>, EventosServiceError> {
    let usecase = UpdateVenueUseCase {
        repo: state.venue_repo(),
    };
    let patch = VenuePatch::from(VenueInput::from(body));
    let venue = usecase.execute(identity.user_id, id, patch).await?;
    Ok(Json(venue.into()))
}

// ── PATCH /locais/{id} ───────────────────────────────────────────────────────

pub async fn patch_venue(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<VenueId>,
    ValidJson(body): ValidJson<PatchVenueRequest>,
) -> Result<Json<VenueResponse>, EventosServiceError> {
    let usecase = UpdateVenueUseCase {
        repo: state.venue_repo(),
    };
    let venue = usecase.execute(identity.user_id, id, body.into()).await?;
    Ok(Json(venue.into()))
}

// ── DELETE /locais/{id} ──────────────────────────────────────────────────────

pub async fn delete_venue(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<VenueId>,
) -> Result<StatusCode, EventosServiceError> {
    let usecase = DeleteVenueUseCase {
        repo: state.venue_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
