use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use eventos_domain::event_status::EventStatus;
use eventos_domain::id::{CostId, EventId, UserId, VenueId};

/// Registered account. Every venue and event hangs off one of these.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub cpf: String,
    pub email: String,
    /// Argon2id PHC string, never serialized.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A physical place where events happen.
#[derive(Debug, Clone)]
pub struct Venue {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub owner_id: UserId,
    pub venue_id: VenueId,
    pub title: String,
    pub description: String,
    pub budget: Decimal,
    pub status: EventStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An expense line of an event. Ownership is inherited from the event.
#[derive(Debug, Clone)]
pub struct Cost {
    pub id: CostId,
    pub event_id: EventId,
    pub description: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Costs of one event together with their exact sum.
#[derive(Debug, Clone)]
pub struct CostSummary {
    pub items: Vec<Cost>,
    pub total: Decimal,
}

impl CostSummary {
    pub fn from_costs(items: Vec<Cost>) -> Self {
        let total = items.iter().map(|cost| cost.amount).sum();
        Self { items, total }
    }
}
