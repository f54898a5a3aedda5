use chrono::Utc;
use rust_decimal::Decimal;

use eventos_domain::id::{CostId, EventId, UserId};

use crate::domain::repository::{CostRepository, EventRepository};
use crate::domain::types::{Cost, CostSummary};
use crate::domain::validation::{normalize_money, validate_cost};
use crate::error::EventosServiceError;

async fn ensure_owned_event<E: EventRepository>(
    events: &E,
    owner: UserId,
    event_id: EventId,
) -> Result<(), EventosServiceError> {
    match events.get(owner, event_id).await? {
        Some(_) => Ok(()),
        None => Err(EventosServiceError::validation(
            "event_id does not reference one of your events",
        )),
    }
}

// ── CreateCost ───────────────────────────────────────────────────────────────

pub struct CostInput {
    pub event_id: EventId,
    pub description: String,
    pub amount: Decimal,
}

pub struct CreateCostUseCase<C: CostRepository, E: EventRepository> {
    pub costs: C,
    pub events: E,
}

impl<C: CostRepository, E: EventRepository> CreateCostUseCase<C, E> {
    pub async fn execute(&self, owner: UserId, input: CostInput) -> Result<Cost, EventosServiceError> {
        let now = Utc::now();
        let cost = Cost {
            id: CostId::new(),
            event_id: input.event_id,
            description: input.description,
            amount: normalize_money("amount", input.amount)?,
            created_at: now,
            updated_at: now,
        };
        validate_cost(&cost)?;
        ensure_owned_event(&self.events, owner, cost.event_id).await?;

        self.costs.create(&cost).await?;
        tracing::info!(cost_id = %cost.id, event_id = %cost.event_id, "cost created");
        Ok(cost)
    }
}

// ── ListCosts ────────────────────────────────────────────────────────────────

pub struct ListCostsUseCase<R: CostRepository> {
    pub repo: R,
}

impl<R: CostRepository> ListCostsUseCase<R> {
    pub async fn execute(&self, owner: UserId) -> Result<Vec<Cost>, EventosServiceError> {
        self.repo.list(owner).await
    }
}

// ── GetCost ──────────────────────────────────────────────────────────────────

pub struct GetCostUseCase<R: CostRepository> {
    pub repo: R,
}

impl<R: CostRepository> GetCostUseCase<R> {
    pub async fn execute(&self, owner: UserId, id: CostId) -> Result<Cost, EventosServiceError> {
        self.repo
            .get(owner, id)
            .await?
            .ok_or(EventosServiceError::CostNotFound)
    }
}

// ── UpdateCost (PUT and PATCH) ───────────────────────────────────────────────

#[derive(Default)]
pub struct CostPatch {
    pub event_id: Option<EventId>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
}

impl From<CostInput> for CostPatch {
    fn from(input: CostInput) -> Self {
        Self {
            event_id: Some(input.event_id),
            description: Some(input.description),
            amount: Some(input.amount),
        }
    }
}

pub struct UpdateCostUseCase<C: CostRepository, E: EventRepository> {
    pub costs: C,
    pub events: E,
}

impl<C: CostRepository, E: EventRepository> UpdateCostUseCase<C, E> {
    pub async fn execute(
        &self,
        owner: UserId,
        id: CostId,
        patch: CostPatch,
    ) -> Result<Cost, EventosServiceError> {
        if patch.event_id.is_none() && patch.description.is_none() && patch.amount.is_none() {
            return Err(EventosServiceError::MissingData);
        }
        let amount = patch
            .amount
            .map(|amount| normalize_money("amount", amount))
            .transpose()?;

        let mut cost = self
            .costs
            .get(owner, id)
            .await?
            .ok_or(EventosServiceError::CostNotFound)?;

        if let Some(description) = patch.description {
            cost.description = description;
        }
        if let Some(amount) = amount {
            cost.amount = amount;
        }
        validate_cost(&cost)?;

        if let Some(event_id) = patch.event_id {
            if event_id != cost.event_id {
                ensure_owned_event(&self.events, owner, event_id).await?;
            }
            cost.event_id = event_id;
        }
        cost.updated_at = Utc::now();

        if !self.costs.update(owner, &cost).await? {
            return Err(EventosServiceError::CostNotFound);
        }
        tracing::info!(cost_id = %cost.id, event_id = %cost.event_id, "cost updated");
        Ok(cost)
    }
}

// ── DeleteCost ───────────────────────────────────────────────────────────────

pub struct DeleteCostUseCase<R: CostRepository> {
    pub repo: R,
}

impl<R: CostRepository> DeleteCostUseCase<R> {
    pub async fn execute(&self, owner: UserId, id: CostId) -> Result<(), EventosServiceError> {
        let deleted = self.repo.delete(owner, id).await?;
        if !deleted {
            return Err(EventosServiceError::CostNotFound);
        }
        tracing::info!(cost_id = %id, owner_id = %owner, "cost deleted");
        Ok(())
    }
}

// ── GetEventCosts ────────────────────────────────────────────────────────────

pub struct GetEventCostsUseCase<C: CostRepository, E: EventRepository> {
    pub costs: C,
    pub events: E,
}

impl<C: CostRepository, E: EventRepository> GetEventCostsUseCase<C, E> {
    /// Costs of one of the caller's events and their exact total. An event
    /// that is missing or not the caller's is `EventNotFound`.
    pub async fn execute(
        &self,
        owner: UserId,
        event_id: EventId,
    ) -> Result<CostSummary, EventosServiceError> {
        if self.events.get(owner, event_id).await?.is_none() {
            return Err(EventosServiceError::EventNotFound);
        }
        let costs = self.costs.list_by_event(event_id).await?;
        Ok(CostSummary::from_costs(costs))
    }
}
