use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use eventos_auth_types::identity::Identity;
use eventos_core::json::ValidJson;
use eventos_core::path::ValidPath;
use eventos_domain::id::{CostId, EventId};

use crate::domain::types::{Cost, CostSummary};
use crate::error::EventosServiceError;
use crate::state::AppState;
use crate::usecase::cost::{
    CostInput, CostPatch, CreateCostUseCase, DeleteCostUseCase, GetCostUseCase,
    GetEventCostsUseCase, ListCostsUseCase, UpdateCostUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CostRequest {
    pub event_id: EventId,
    pub description: String,
    pub amount: Decimal,
}

impl From<CostRequest> for CostInput {
    fn from(body: CostRequest) -> Self {
        Self {
            event_id: body.event_id,
            description: body.description,
            amount: body.amount,
        }
    }
}

#[derive(Deserialize)]
pub struct PatchCostRequest {
    pub event_id: Option<EventId>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
}

#[derive(Serialize)]
pub struct CostResponse {
    pub id: CostId,
    pub event_id: EventId,
    pub description: String,
    pub amount: Decimal,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "eventos_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Cost> for CostResponse {
    fn from(cost: Cost) -> Self {
        Self {
            id: cost.id,
            event_id: cost.event_id,
            description: cost.description,
            amount: cost.amount,
            created_at: cost.created_at,
            updated_at: cost.updated_at,
        }
    }
}

/// `{"items": [...], "total": "750.00"}`; `total` is `"0"` with no items.
#[derive(Serialize)]
pub struct CostSummaryResponse {
    pub items: Vec<CostResponse>,
    pub total: Decimal,
}

impl From<CostSummary> for CostSummaryResponse {
    fn from(summary: CostSummary) -> Self {
        Self {
            items: summary.items.into_iter().map(CostResponse::from).collect(),
            total: summary.total,
        }
    }
}

// ── GET /custos ──────────────────────────────────────────────────────────────

pub async fn list_costs(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<CostResponse>>, EventosServiceError> {
    let usecase = ListCostsUseCase {
        repo: state.cost_repo(),
    };
    let costs = usecase.execute(identity.user_id).await?;
    Ok(Json(costs.into_iter().map(CostResponse::from).collect()))
}

// ── POST /custos ─────────────────────────────────────────────────────────────

pub async fn create_cost(
    identity: Identity,
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CostRequest>,
) -> Result<(StatusCode, Json<CostResponse>), EventosServiceError> {
    let usecase = CreateCostUseCase {
        costs: state.cost_repo(),
        events: state.event_repo(),
    };
    let cost = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(cost.into())))
}

// ── GET /custos/{id} ─────────────────────────────────────────────────────────

pub async fn get_cost(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<CostId>,
) -> Result<Json<CostResponse>, EventosServiceError> {
    let usecase = GetCostUseCase {
        repo: state.cost_repo(),
    };
    let cost = usecase.execute(identity.user_id, id).await?;
    Ok(Json(cost.into()))
}

// ── PUT /custos/{id} ─────────────────────────────────────────────────────────

pub async fn replace_cost(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<CostId>,
    ValidJson(body): ValidJson<CostRequest>,
) -> Result<Json<CostResponse>, EventosServiceError> {
    let usecase = UpdateCostUseCase {
        costs: state.cost_repo(),
        events: state.event_repo(),
    };
    let patch = CostPatch::from(CostInput::from(body));
    let cost = usecase.execute(identity.user_id, id, patch).await?;
    Ok(Json(cost.into()))
}

// ── PATCH /custos/{id} ───────────────────────────────────────────────────────

pub async fn patch_cost(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<CostId>,
    ValidJson(body): ValidJson<PatchCostRequest>,
) -> Result<Json<CostResponse>, EventosServiceError> {
    let usecase = UpdateCostUseCase {
        costs: state.cost_repo(),
        events: state.event_repo(),
    };
    let patch = CostPatch {
        event_id: body.event_id,
        description: body.description,
        amount: body.amount,
    };
    let cost = usecase.execute(identity.user_id, id, patch).await?;
    Ok(Json(cost.into()))
}

// ── DELETE /custos/{id} ──────────────────────────────────────────────────────

pub async fn delete_cost(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<CostId>,
) -> Result<StatusCode, EventosServiceError> {
    let usecase = DeleteCostUseCase {
        repo: state.cost_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /eventos/{id}/custos ─────────────────────────────────────────────────

pub async fn get_event_costs(
    identity: Identity,
    State(state): State<AppState>,
    ValidPath(event_id): ValidPath<EventId>,
) -> Result<Json<CostSummaryResponse>, EventosServiceError> {
    let usecase = GetEventCostsUseCase {
        costs: state.cost_repo(),
        events: state.event_repo(),
    };
    let summary = usecase.execute(identity.user_id, event_id).await?;
    Ok(Json(summary.into()))
}
