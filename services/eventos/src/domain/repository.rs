#![allow(async_fn_in_trait)]

use eventos_domain::id::{CostId, EventId, UserId, VenueId};

use crate::domain::types::{Cost, Event, User, Venue};
use crate::error::EventosServiceError;

/// Repository for user accounts. Users are not owner-scoped.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, EventosServiceError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, EventosServiceError>;
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, EventosServiceError>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, EventosServiceError>;

    /// Insert a user. A unique violation maps to `UsernameTaken` or `CpfTaken`.
    async fn create(&self, user: &User) -> Result<(), EventosServiceError>;

    /// Overwrite every mutable column of an existing user.
    async fn update(&self, user: &User) -> Result<(), EventosServiceError>;

    /// Delete a user and, by cascade, everything they own. Returns `true` if a
    /// row was deleted.
    async fn delete(&self, id: UserId) -> Result<bool, EventosServiceError>;
}

/// Repository for venues. Every read and write is filtered by owner.
pub trait VenueRepository: Send + Sync {
    async fn list(&self, owner: UserId) -> Result<Vec<Venue>, EventosServiceError>;
    async fn get(&self, owner: UserId, id: VenueId) -> Result<Option<Venue>, EventosServiceError>;
    async fn create(&self, venue: &Venue) -> Result<(), EventosServiceError>;

    /// Overwrite a venue owned by `venue.owner_id`. Returns `false` when no
    /// such row exists.
    async fn update(&self, venue: &Venue) -> Result<bool, EventosServiceError>;

    /// Delete a venue (and its events) if `owner` owns it.
    async fn delete(&self, owner: UserId, id: VenueId) -> Result<bool, EventosServiceError>;
}

/// Repository for events. Every read and write is filtered by owner.
pub trait EventRepository: Send + Sync {
    async fn list(&self, owner: UserId) -> Result<Vec<Event>, EventosServiceError>;
    async fn get(&self, owner: UserId, id: EventId) -> Result<Option<Event>, EventosServiceError>;
    async fn create(&self, event: &Event) -> Result<(), EventosServiceError>;

    /// Overwrite an event owned by `event.owner_id`. Returns `false` when no
    /// such row exists.
    async fn update(&self, event: &Event) -> Result<bool, EventosServiceError>;

    /// Delete an event (and its costs) if `owner` owns it.
    async fn delete(&self, owner: UserId, id: EventId) -> Result<bool, EventosServiceError>;
}

/// Repository for costs. Costs carry no owner column; scoping goes through
/// the parent event.
pub trait CostRepository: Send + Sync {
    /// All costs whose event belongs to `owner`.
    async fn list(&self, owner: UserId) -> Result<Vec<Cost>, EventosServiceError>;
    async fn get(&self, owner: UserId, id: CostId) -> Result<Option<Cost>, EventosServiceError>;

    /// Costs of one event, oldest first. Callers check event ownership first.
    async fn list_by_event(&self, event_id: EventId) -> Result<Vec<Cost>, EventosServiceError>;

    async fn create(&self, cost: &Cost) -> Result<(), EventosServiceError>;

    /// Overwrite a cost whose current event belongs to `owner`.
    async fn update(&self, owner: UserId, cost: &Cost) -> Result<bool, EventosServiceError>;

    async fn delete(&self, owner: UserId, id: CostId) -> Result<bool, EventosServiceError>;
}
