use std::str::FromStr;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use eventos::domain::repository::{
    CostRepository, EventRepository, UserRepository, VenueRepository,
};
use eventos::domain::types::{Cost, Event, User, Venue};
use eventos::error::EventosServiceError;
use eventos::usecase::cost::CostInput;
use eventos::usecase::event::EventInput;
use eventos::usecase::venue::VenueInput;
use eventos_domain::event_status::EventStatus;
use eventos_domain::id::{CostId, EventId, UserId, VenueId};

// ── MemoryStore ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    venues: Vec<Venue>,
    events: Vec<Event>,
    costs: Vec<Cost>,
}

impl Tables {
    fn event_owner(&self, event_id: EventId) -> Option<UserId> {
        self.events
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| e.owner_id)
    }

    fn drop_events_where(&mut self, doomed: impl Fn(&Event) -> bool) {
        let removed: Vec<EventId> = self
            .events
            .iter()
            .filter(|e| doomed(e))
            .map(|e| e.id)
            .collect();
        self.events.retain(|e| !removed.contains(&e.id));
        self.costs.retain(|c| !removed.contains(&c.event_id));
    }
}

/// In-memory stand-in for the database. Clones share the same tables, so one
/// store can back several use cases. Deletes cascade like the FK constraints.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cost_count(&self) -> usize {
        self.tables.lock().unwrap().costs.len()
    }
}

impl UserRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, EventosServiceError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.cpf == cpf).cloned())
    }

    async fn create(&self, user: &User) -> Result<(), EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(EventosServiceError::UsernameTaken);
        }
        if tables.users.iter().any(|u| u.cpf == user.cpf) {
            return Err(EventosServiceError::CpfTaken);
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(slot) = tables.users.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        if tables.users.len() == before {
            return Ok(false);
        }
        tables.venues.retain(|v| v.owner_id != id);
        tables.drop_events_where(|e| e.owner_id == id);
        Ok(true)
    }
}

impl VenueRepository for MemoryStore {
    async fn list(&self, owner: UserId) -> Result<Vec<Venue>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .venues
            .iter()
            .filter(|v| v.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn get(&self, owner: UserId, id: VenueId) -> Result<Option<Venue>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .venues
            .iter()
            .find(|v| v.id == id && v.owner_id == owner)
            .cloned())
    }

    async fn create(&self, venue: &Venue) -> Result<(), EventosServiceError> {
        self.tables.lock().unwrap().venues.push(venue.clone());
        Ok(())
    }

    async fn update(&self, venue: &Venue) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        match tables
            .venues
            .iter_mut()
            .find(|v| v.id == venue.id && v.owner_id == venue.owner_id)
        {
            Some(slot) => {
                *slot = venue.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, owner: UserId, id: VenueId) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.venues.len();
        tables.venues.retain(|v| !(v.id == id && v.owner_id == owner));
        if tables.venues.len() == before {
            return Ok(false);
        }
        tables.drop_events_where(|e| e.venue_id == id);
        Ok(true)
    }
}

impl EventRepository for MemoryStore {
    async fn list(&self, owner: UserId) -> Result<Vec<Event>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .events
            .iter()
            .filter(|e| e.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn get(&self, owner: UserId, id: EventId) -> Result<Option<Event>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .events
            .iter()
            .find(|e| e.id == id && e.owner_id == owner)
            .cloned())
    }

    async fn create(&self, event: &Event) -> Result<(), EventosServiceError> {
        self.tables.lock().unwrap().events.push(event.clone());
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        match tables
            .events
            .iter_mut()
            .find(|e| e.id == event.id && e.owner_id == event.owner_id)
        {
            Some(slot) => {
                *slot = event.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, owner: UserId, id: EventId) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let found = tables
            .events
            .iter()
            .any(|e| e.id == id && e.owner_id == owner);
        if found {
            tables.drop_events_where(|e| e.id == id);
        }
        Ok(found)
    }
}

impl CostRepository for MemoryStore {
    async fn list(&self, owner: UserId) -> Result<Vec<Cost>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .costs
            .iter()
            .filter(|c| tables.event_owner(c.event_id) == Some(owner))
            .cloned()
            .collect())
    }

    async fn get(&self, owner: UserId, id: CostId) -> Result<Option<Cost>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .costs
            .iter()
            .find(|c| c.id == id && tables.event_owner(c.event_id) == Some(owner))
            .cloned())
    }

    async fn list_by_event(&self, event_id: EventId) -> Result<Vec<Cost>, EventosServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .costs
            .iter()
            .filter(|c| c.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create(&self, cost: &Cost) -> Result<(), EventosServiceError> {
        self.tables.lock().unwrap().costs.push(cost.clone());
        Ok(())
    }

    async fn update(&self, owner: UserId, cost: &Cost) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let current_event = tables
            .costs
            .iter()
            .find(|c| c.id == cost.id)
            .map(|c| c.event_id);
        let owned = current_event.and_then(|event_id| tables.event_owner(event_id)) == Some(owner);
        if !owned {
            return Ok(false);
        }
        if let Some(slot) = tables.costs.iter_mut().find(|c| c.id == cost.id) {
            *slot = cost.clone();
        }
        Ok(true)
    }

    async fn delete(&self, owner: UserId, id: CostId) -> Result<bool, EventosServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let owned = tables
            .costs
            .iter()
            .find(|c| c.id == id)
            .and_then(|c| tables.event_owner(c.event_id))
            == Some(owner);
        if owned {
            tables.costs.retain(|c| c.id != id);
        }
        Ok(owned)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap()
}

pub fn venue_input(name: &str) -> VenueInput {
    VenueInput {
        name: name.into(),
        street: "Rua das Flores".into(),
        number: 100,
        neighborhood: "Centro".into(),
        city: "Recife".into(),
        state: "PE".into(),
        postal_code: "50000-000".into(),
        capacity: 300,
    }
}

pub fn event_input(venue_id: VenueId, end_time: Option<DateTime<Utc>>) -> EventInput {
    EventInput {
        venue_id,
        title: "Festa de Natal".into(),
        description: "Confraternização".into(),
        budget: dec("1000.00"),
        status: EventStatus::Planned,
        start_time: start_time(),
        end_time,
    }
}

pub fn cost_input(event_id: EventId, amount: &str) -> CostInput {
    CostInput {
        event_id,
        description: "Buffet".into(),
        amount: dec(amount),
    }
}
