use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use eventos_domain::event_status::EventStatus;
use eventos_domain::id::{EventId, UserId, VenueId};

use crate::domain::repository::{EventRepository, VenueRepository};
use crate::domain::types::Event;
use crate::domain::validation::{normalize_money, validate_event};
use crate::error::EventosServiceError;

/// The venue must belong to the caller; a foreign or unknown id is a bad
/// reference, and says nothing about whether it exists.
async fn ensure_owned_venue<V: VenueRepository>(
    venues: &V,
    owner: UserId,
    venue_id: VenueId,
) -> Result<(), EventosServiceError> {
    match venues.get(owner, venue_id).await? {
        Some(_) => Ok(()),
        None => Err(EventosServiceError::validation(
            "venue_id does not reference one of your venues",
        )),
    }
}

// ── CreateEvent ──────────────────────────────────────────────────────────────

pub struct EventInput {
    pub venue_id: VenueId,
    pub title: String,
    pub description: String,
    pub budget: Decimal,
    pub status: EventStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

pub struct CreateEventUseCase<E: EventRepository, V: VenueRepository> {
    pub events: E,
    pub venues: V,
}

impl<E: EventRepository, V: VenueRepository> CreateEventUseCase<E, V> {
    pub async fn execute(
        &self,
        owner: UserId,
        input: EventInput,
    ) -> Result<Event, EventosServiceError> {
        let now = Utc::now();
        let event = Event {
            id: EventId::new(),
            owner_id: owner,
            venue_id: input.venue_id,
            title: input.title,
            description: input.description,
            budget: normalize_money("budget", input.budget)?,
            status: input.status,
            start_time: input.start_time,
            end_time: input.end_time,
            created_at: now,
            updated_at: now,
        };
        validate_event(&event)?;
        ensure_owned_venue(&self.venues, owner, event.venue_id).await?;

        self.events.create(&event).await?;
        tracing::info!(event_id = %event.id, owner_id = %owner, "event created");
        Ok(event)
    }
}

// ── ListEvents ───────────────────────────────────────────────────────────────

pub struct ListEventsUseCase<R: EventRepository> {
    pub repo: R,
}

impl<R: EventRepository> ListEventsUseCase<R> {
    pub async fn execute(&self, owner: UserId) -> Result<Vec<Event>, EventosServiceError> {
        self.repo.list(owner).await
    }
}

// ── GetEvent ─────────────────────────────────────────────────────────────────

pub struct GetEventUseCase<R: EventRepository> {
    pub repo: R,
}

impl<R: EventRepository> GetEventUseCase<R> {
    pub async fn execute(&self, owner: UserId, id: EventId) -> Result<Event, EventosServiceError> {
        self.repo
            .get(owner, id)
            .await?
            .ok_or(EventosServiceError::EventNotFound)
    }
}

// ── UpdateEvent (PUT and PATCH) ──────────────────────────────────────────────

/// `end_time: Some(None)` clears the end; `None` leaves it as stored.
#[derive(Default)]
pub struct EventPatch {
    pub venue_id: Option<VenueId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub status: Option<EventStatus>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<Option<DateTime<Utc>>>,
}

impl EventPatch {
    fn is_empty(&self) -> bool {
        self.venue_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.budget.is_none()
            && self.status.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }
}

impl From<EventInput> for EventPatch {
    fn from(input: EventInput) -> Self {
        Self {
            venue_id: Some(input.venue_id),
            title: Some(input.title),
            description: Some(input.description),
            budget: Some(input.budget),
            status: Some(input.status),
            start_time: Some(input.start_time),
            end_time: Some(input.end_time),
        }
    }
}

pub struct UpdateEventUseCase<E: EventRepository, V: VenueRepository> {
    pub events: E,
    pub venues: V,
}

impl<E: EventRepository, V: VenueRepository> UpdateEventUseCase<E, V> {
    /// The window rule is checked on the merged record, so moving only the
    /// start past a stored end is rejected too.
    pub async fn execute(
        &self,
        owner: UserId,
        id: EventId,
        patch: EventPatch,
    ) -> Result<Event, EventosServiceError> {
        if patch.is_empty() {
            return Err(EventosServiceError::MissingData);
        }
        let budget = patch
            .budget
            .map(|budget| normalize_money("budget", budget))
            .transpose()?;

        let mut event = self
            .events
            .get(owner, id)
            .await?
            .ok_or(EventosServiceError::EventNotFound)?;

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(budget) = budget {
            event.budget = budget;
        }
        if let Some(status) = patch.status {
            event.status = status;
        }
        if let Some(start_time) = patch.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            event.end_time = end_time;
        }
        validate_event(&event)?;

        if let Some(venue_id) = patch.venue_id {
            if venue_id != event.venue_id {
                ensure_owned_venue(&self.venues, owner, venue_id).await?;
            }
            event.venue_id = venue_id;
        }
        event.updated_at = Utc::now();

        if !self.events.update(&event).await? {
            return Err(EventosServiceError::EventNotFound);
        }
        tracing::info!(event_id = %event.id, owner_id = %owner, "event updated");
        Ok(event)
    }
}

// ── DeleteEvent ──────────────────────────────────────────────────────────────

pub struct DeleteEventUseCase<R: EventRepository> {
    pub repo: R,
}

impl<R: EventRepository> DeleteEventUseCase<R> {
    pub async fn execute(&self, owner: UserId, id: EventId) -> Result<(), EventosServiceError> {
        let deleted = self.repo.delete(owner, id).await?;
        if !deleted {
            return Err(EventosServiceError::EventNotFound);
        }
        tracing::info!(event_id = %id, owner_id = %owner, "event deleted");
        Ok(())
    }
}
