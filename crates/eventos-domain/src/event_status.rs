//! Event lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an event.
///
/// Wire format: SCREAMING_SNAKE_CASE English names. The Portuguese labels used
/// by earlier clients (`PLANEJADO`, ...) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    #[serde(alias = "PLANEJADO")]
    Planned,
    #[serde(alias = "CONFIRMADO")]
    Confirmed,
    #[serde(alias = "EM_ANDAMENTO")]
    InProgress,
    #[serde(alias = "CONCLUIDO")]
    Completed,
    #[serde(alias = "CANCELADO")]
    Cancelled,
}

/// Returned when a stored status string is not a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown event status: {0}")]
pub struct UnknownEventStatus(pub String);

impl EventStatus {
    /// Storage representation (matches the wire name).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::Confirmed => "CONFIRMED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnknownEventStatus> {
        match s {
            "PLANNED" => Ok(Self::Planned),
            "CONFIRMED" => Ok(Self::Confirmed),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(UnknownEventStatus(other.to_owned())),
        }
    }
}
