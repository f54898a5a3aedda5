use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Query, SelectStatement},
};

use eventos_core::sea_ext::DbErrExt;
use eventos_domain::event_status::EventStatus;
use eventos_domain::id::{CostId, EventId, UserId, VenueId};
use eventos_schema::{costs, events, users, venues};

use crate::domain::repository::{
    CostRepository, EventRepository, UserRepository, VenueRepository,
};
use crate::domain::types::{Cost, Event, User, Venue};
use crate::error::EventosServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, EventosServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, EventosServiceError> {
        let model = users::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, EventosServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, EventosServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .context("find user by cpf")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), EventosServiceError> {
        users::ActiveModel {
            id: Set(user.id.as_uuid()),
            created_at: Set(user.created_at),
            ..user_active_model(user)
        }
        .insert(&self.db)
        .await
        .map_err(|e| user_write_error(e, "create user"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), EventosServiceError> {
        users::ActiveModel {
            id: Set(user.id.as_uuid()),
            ..user_active_model(user)
        }
        .update(&self.db)
        .await
        .map_err(|e| user_write_error(e, "update user"))?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<bool, EventosServiceError> {
        let result = users::Entity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        username: Set(user.username.clone()),
        cpf: Set(user.cpf.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        updated_at: Set(user.updated_at),
        ..Default::default()
    }
}

/// Unique violations lost to a concurrent writer still surface as 409.
fn user_write_error(err: DbErr, context: &'static str) -> EventosServiceError {
    if err.is_unique_violation() {
        if err.to_string().contains("users_cpf_key") {
            return EventosServiceError::CpfTaken;
        }
        return EventosServiceError::UsernameTaken;
    }
    EventosServiceError::Internal(anyhow::Error::new(err).context(context))
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        username: model.username,
        cpf: model.cpf,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Venue repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVenueRepository {
    pub db: DatabaseConnection,
}

impl VenueRepository for DbVenueRepository {
    async fn list(&self, owner: UserId) -> Result<Vec<Venue>, EventosServiceError> {
        let models = venues::Entity::find()
            .filter(venues::Column::OwnerId.eq(owner.as_uuid()))
            .order_by_asc(venues::Column::CreatedAt)
            .order_by_asc(venues::Column::Id)
            .all(&self.db)
            .await
            .context("list venues")?;
        Ok(models.into_iter().map(venue_from_model).collect())
    }

    async fn get(&self, owner: UserId, id: VenueId) -> Result<Option<Venue>, EventosServiceError> {
        let model = venues::Entity::find_by_id(id.as_uuid())
            .filter(venues::Column::OwnerId.eq(owner.as_uuid()))
            .one(&self.db)
            .await
            .context("get venue")?;
        Ok(model.map(venue_from_model))
    }

    async fn create(&self, venue: &Venue) -> Result<(), EventosServiceError> {
        venues::ActiveModel {
            id: Set(venue.id.as_uuid()),
            owner_id: Set(venue.owner_id.as_uuid()),
            created_at: Set(venue.created_at),
            ..venue_active_model(venue)
        }
        .insert(&self.db)
        .await
        .context("create venue")?;
        Ok(())
    }

    async fn update(&self, venue: &Venue) -> Result<bool, EventosServiceError> {
        let result = venues::Entity::update_many()
            .set(venue_active_model(venue))
            .filter(venues::Column::Id.eq(venue.id.as_uuid()))
            .filter(venues::Column::OwnerId.eq(venue.owner_id.as_uuid()))
            .exec(&self.db)
            .await
            .context("update venue")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, owner: UserId, id: VenueId) -> Result<bool, EventosServiceError> {
        let result = venues::Entity::delete_many()
            .filter(venues::Column::Id.eq(id.as_uuid()))
            .filter(venues::Column::OwnerId.eq(owner.as_uuid()))
            .exec(&self.db)
            .await
            .context("delete venue")?;
        Ok(result.rows_affected > 0)
    }
}

/// Mutable columns only; id, owner and created_at stay untouched on update.
fn venue_active_model(venue: &Venue) -> venues::ActiveModel {
    venues::ActiveModel {
        name: Set(venue.name.clone()),
        street: Set(venue.street.clone()),
        number: Set(venue.number),
        neighborhood: Set(venue.neighborhood.clone()),
        city: Set(venue.city.clone()),
        state: Set(venue.state.clone()),
        postal_code: Set(venue.postal_code.clone()),
        capacity: Set(venue.capacity),
        updated_at: Set(venue.updated_at),
        ..Default::default()
    }
}

fn venue_from_model(model: venues::Model) -> Venue {
    Venue {
        id: VenueId(model.id),
        owner_id: UserId(model.owner_id),
        name: model.name,
        street: model.street,
        number: model.number,
        neighborhood: model.neighborhood,
        city: model.city,
        state: model.state,
        postal_code: model.postal_code,
        capacity: model.capacity,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Event repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEventRepository {
    pub db: DatabaseConnection,
}

impl EventRepository for DbEventRepository {
    async fn list(&self, owner: UserId) -> Result<Vec<Event>, EventosServiceError> {
        let models = events::Entity::find()
            .filter(events::Column::OwnerId.eq(owner.as_uuid()))
            .order_by_asc(events::Column::CreatedAt)
            .order_by_asc(events::Column::Id)
            .all(&self.db)
            .await
            .context("list events")?;
        models.into_iter().map(event_from_model).collect()
    }

    async fn get(&self, owner: UserId, id: EventId) -> Result<Option<Event>, EventosServiceError> {
        let model = events::Entity::find_by_id(id.as_uuid())
            .filter(events::Column::OwnerId.eq(owner.as_uuid()))
            .one(&self.db)
            .await
            .context("get event")?;
        model.map(event_from_model).transpose()
    }

    async fn create(&self, event: &Event) -> Result<(), EventosServiceError> {
        events::ActiveModel {
            id: Set(event.id.as_uuid()),
            owner_id: Set(event.owner_id.as_uuid()),
            created_at: Set(event.created_at),
            ..event_active_model(event)
        }
        .insert(&self.db)
        .await
        .context("create event")?;
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<bool, EventosServiceError> {
        let result = events::Entity::update_many()
            .set(event_active_model(event))
            .filter(events::Column::Id.eq(event.id.as_uuid()))
            .filter(events::Column::OwnerId.eq(event.owner_id.as_uuid()))
            .exec(&self.db)
            .await
            .context("update event")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, owner: UserId, id: EventId) -> Result<bool, EventosServiceError> {
        let result = events::Entity::delete_many()
            .filter(events::Column::Id.eq(id.as_uuid()))
            .filter(events::Column::OwnerId.eq(owner.as_uuid()))
            .exec(&self.db)
            .await
            .context("delete event")?;
        Ok(result.rows_affected > 0)
    }
}

fn event_active_model(event: &Event) -> events::ActiveModel {
    events::ActiveModel {
        venue_id: Set(event.venue_id.as_uuid()),
        title: Set(event.title.clone()),
        description: Set(event.description.clone()),
        budget: Set(event.budget),
        status: Set(event.status.as_str().to_owned()),
        start_time: Set(event.start_time),
        end_time: Set(event.end_time),
        updated_at: Set(event.updated_at),
        ..Default::default()
    }
}

fn event_from_model(model: events::Model) -> Result<Event, EventosServiceError> {
    let status = EventStatus::parse(&model.status).context("decode event status")?;
    Ok(Event {
        id: EventId(model.id),
        owner_id: UserId(model.owner_id),
        venue_id: VenueId(model.venue_id),
        title: model.title,
        description: model.description,
        budget: model.budget,
        status,
        start_time: model.start_time,
        end_time: model.end_time,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Cost repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCostRepository {
    pub db: DatabaseConnection,
}

/// `SELECT id FROM events WHERE owner_id = $owner`
fn owned_event_ids(owner: UserId) -> SelectStatement {
    Query::select()
        .column(events::Column::Id)
        .from(events::Entity)
        .and_where(events::Column::OwnerId.eq(owner.as_uuid()))
        .to_owned()
}

impl CostRepository for DbCostRepository {
    async fn list(&self, owner: UserId) -> Result<Vec<Cost>, EventosServiceError> {
        let models = costs::Entity::find()
            .inner_join(events::Entity)
            .filter(events::Column::OwnerId.eq(owner.as_uuid()))
            .order_by_asc(costs::Column::CreatedAt)
            .order_by_asc(costs::Column::Id)
            .all(&self.db)
            .await
            .context("list costs")?;
        Ok(models.into_iter().map(cost_from_model).collect())
    }

    async fn get(&self, owner: UserId, id: CostId) -> Result<Option<Cost>, EventosServiceError> {
        let model = costs::Entity::find_by_id(id.as_uuid())
            .inner_join(events::Entity)
            .filter(events::Column::OwnerId.eq(owner.as_uuid()))
            .one(&self.db)
            .await
            .context("get cost")?;
        Ok(model.map(cost_from_model))
    }

    async fn list_by_event(&self, event_id: EventId) -> Result<Vec<Cost>, EventosServiceError> {
        let models = costs::Entity::find()
            .filter(costs::Column::EventId.eq(event_id.as_uuid()))
            .order_by_asc(costs::Column::CreatedAt)
            .order_by_asc(costs::Column::Id)
            .all(&self.db)
            .await
            .context("list costs by event")?;
        Ok(models.into_iter().map(cost_from_model).collect())
    }

    async fn create(&self, cost: &Cost) -> Result<(), EventosServiceError> {
        costs::ActiveModel {
            id: Set(cost.id.as_uuid()),
            created_at: Set(cost.created_at),
            ..cost_active_model(cost)
        }
        .insert(&self.db)
        .await
        .context("create cost")?;
        Ok(())
    }

    async fn update(&self, owner: UserId, cost: &Cost) -> Result<bool, EventosServiceError> {
        let result = costs::Entity::update_many()
            .set(cost_active_model(cost))
            .filter(costs::Column::Id.eq(cost.id.as_uuid()))
            .filter(costs::Column::EventId.in_subquery(owned_event_ids(owner)))
            .exec(&self.db)
            .await
            .context("update cost")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, owner: UserId, id: CostId) -> Result<bool, EventosServiceError> {
        let result = costs::Entity::delete_many()
            .filter(costs::Column::Id.eq(id.as_uuid()))
            .filter(costs::Column::EventId.in_subquery(owned_event_ids(owner)))
            .exec(&self.db)
            .await
            .context("delete cost")?;
        Ok(result.rows_affected > 0)
    }
}

fn cost_active_model(cost: &Cost) -> costs::ActiveModel {
    costs::ActiveModel {
        event_id: Set(cost.event_id.as_uuid()),
        description: Set(cost.description.clone()),
        amount: Set(cost.amount),
        updated_at: Set(cost.updated_at),
        ..Default::default()
    }
}

fn cost_from_model(model: costs::Model) -> Cost {
    Cost {
        id: CostId(model.id),
        event_id: EventId(model.event_id),
        description: model.description,
        amount: model.amount,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
