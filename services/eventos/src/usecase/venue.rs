use chrono::Utc;

use eventos_domain::id::{UserId, VenueId};

use crate::domain::repository::VenueRepository;
use crate::domain::types::Venue;
use crate::domain::validation::validate_venue;
use crate::error::EventosServiceError;

// ── CreateVenue ──────────────────────────────────────────────────────────────

pub struct VenueInput {
    pub name: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub capacity: i32,
}

pub struct CreateVenueUseCase<R: VenueRepository> {
    pub repo: R,
}

impl<R: VenueRepository> CreateVenueUseCase<R> {
    /// `owner` comes from the session; the body has no say in it.
    pub async fn execute(
        &self,
        owner: UserId,
        input: VenueInput,
    ) -> Result<Venue, EventosServiceError> {
        let now = Utc::now();
        let venue = Venue {
            id: VenueId::new(),
            owner_id: owner,
            name: input.name,
            street: input.street,
            number: input.number,
            neighborhood: input.neighborhood,
            city: input.city,
            state: input.state,
            postal_code: input.postal_code,
            capacity: input.capacity,
            created_at: now,
            updated_at: now,
        };
        validate_venue(&venue)?;
        self.repo.create(&venue).await?;
        tracing::info!(venue_id = %venue.id, owner_id = %owner, "venue created");
        Ok(venue)
    }
}

// ── ListVenues ───────────────────────────────────────────────────────────────

pub struct ListVenuesUseCase<R: VenueRepository> {
    pub repo: R,
}

impl<R: VenueRepository> ListVenuesUseCase<R> {
    pub async fn execute(&self, owner: UserId) -> Result<Vec<Venue>, EventosServiceError> {
        self.repo.list(owner).await
    }
}

// ── GetVenue ─────────────────────────────────────────────────────────────────

pub struct GetVenueUseCase<R: VenueRepository> {
    pub repo: R,
}

impl<R: VenueRepository> GetVenueUseCase<R> {
    pub async fn execute(&self, owner: UserId, id: VenueId) -> Result<Venue, EventosServiceError> {
        self.repo
            .get(owner, id)
            .await?
            .ok_or(EventosServiceError::VenueNotFound)
    }
}

// ── UpdateVenue (PUT and PATCH) ──────────────────────────────────────────────

#[derive(Default)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub capacity: Option<i32>,
}

impl VenuePatch {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.street.is_none()
            && self.number.is_none()
            && self.neighborhood.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.capacity.is_none()
    }

    fn apply(self, venue: &mut Venue) {
        if let Some(name) = self.name {
            venue.name = name;
        }
        if let Some(street) = self.street {
            venue.street = street;
        }
        if let Some(number) = self.number {
            venue.number = number;
        }
        if let Some(neighborhood) = self.neighborhood {
            venue.neighborhood = neighborhood;
        }
        if let Some(city) = self.city {
            venue.city = city;
        }
        if let Some(state) = self.state {
            venue.state = state;
        }
        if let Some(postal_code) = self.postal_code {
            venue.postal_code = postal_code;
        }
        if let Some(capacity) = self.capacity {
            venue.capacity = capacity;
        }
    }
}

impl From<VenueInput> for VenuePatch {
    fn from(input: VenueInput) -> Self {
        Self {
            name: Some(input.name),
            street: Some(input.street),
            number: Some(input.number),
            neighborhood: Some(input.neighborhood),
            city: Some(input.city),
            state: Some(input.state),
            postal_code: Some(input.postal_code),
            capacity: Some(input.capacity),
        }
    }
}

pub struct UpdateVenueUseCase<R: VenueRepository> {
    pub repo: R,
}

impl<R: VenueRepository> UpdateVenueUseCase<R> {
    pub async fn execute(
        &self,
        owner: UserId,
        id: VenueId,
        patch: VenuePatch,
    ) -> Result<Venue, EventosServiceError> {
        if patch.is_empty() {
            return Err(EventosServiceError::MissingData);
        }
        let mut venue = self
            .repo
            .get(owner, id)
            .await?
            .ok_or(EventosServiceError::VenueNotFound)?;
        patch.apply(&mut venue);
        validate_venue(&venue)?;
        venue.updated_at = Utc::now();

        if !self.repo.update(&venue).await? {
            return Err(EventosServiceError::VenueNotFound);
        }
        tracing::info!(venue_id = %venue.id, owner_id = %owner, "venue updated");
        Ok(venue)
    }
}

// ── DeleteVenue ──────────────────────────────────────────────────────────────

pub struct DeleteVenueUseCase<R: VenueRepository> {
    pub repo: R,
}

impl<R: VenueRepository> DeleteVenueUseCase<R> {
    pub async fn execute(&self, owner: UserId, id: VenueId) -> Result<(), EventosServiceError> {
        let deleted = self.repo.delete(owner, id).await?;
        if !deleted {
            return Err(EventosServiceError::VenueNotFound);
        }
        tracing::info!(venue_id = %id, owner_id = %owner, "venue deleted");
        Ok(())
    }
}
