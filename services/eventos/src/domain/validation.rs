//! Field and record checks run before anything touches the store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::types::{Cost, Event, Venue};
use crate::error::EventosServiceError;

const MAX_USERNAME_LEN: usize = 150;
const MAX_TEXT_LEN: usize = 255;
const CPF_DIGITS: usize = 11;
const MONEY_SCALE: u32 = 2;

/// Largest magnitude that fits `NUMERIC(12,2)`: ten integer digits.
fn money_limit() -> Decimal {
    Decimal::from(10_000_000_000_i64)
}

/// Letters, digits and `@ . + - _`, at most 150 characters.
pub fn validate_username(username: &str) -> bool {
    if username.is_empty() || username.chars().count() > MAX_USERNAME_LEN {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

/// Eleven digits, optionally punctuated as `000.000.000-00`.
pub fn validate_cpf(cpf: &str) -> bool {
    if !cpf.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        return false;
    }
    cpf.chars().filter(char::is_ascii_digit).count() == CPF_DIGITS
}

/// The bare 11 digits of a valid CPF, so `123.456.789-10` and `12345678910`
/// name the same person. `None` when [`validate_cpf`] rejects the input.
pub fn canonical_cpf(cpf: &str) -> Option<String> {
    validate_cpf(cpf).then(|| cpf.chars().filter(char::is_ascii_digit).collect())
}

pub fn validate_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

pub fn require_text(field: &str, value: &str) -> Result<(), EventosServiceError> {
    if value.trim().is_empty() {
        return Err(EventosServiceError::validation(format!(
            "{field} must not be blank"
        )));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(EventosServiceError::validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

pub fn require_non_negative(field: &str, value: i32) -> Result<(), EventosServiceError> {
    if value < 0 {
        return Err(EventosServiceError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

/// Check an amount of money and bring it to exactly two fractional digits.
///
/// `10.500` is accepted as `10.50`; `10.505` is rejected rather than rounded.
pub fn normalize_money(field: &str, value: Decimal) -> Result<Decimal, EventosServiceError> {
    if value.round_dp(MONEY_SCALE) != value {
        return Err(EventosServiceError::validation(format!(
            "{field} must have at most {MONEY_SCALE} decimal places"
        )));
    }
    if value.abs() >= money_limit() {
        return Err(EventosServiceError::validation(format!(
            "{field} is out of range"
        )));
    }
    let mut normalized = value;
    normalized.rescale(MONEY_SCALE);
    Ok(normalized)
}

/// An absent end is always fine; a present one may equal the start.
pub fn validate_event_window(
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
) -> Result<(), EventosServiceError> {
    match end_time {
        Some(end) if end < start_time => Err(EventosServiceError::validation(
            "end_time must not be earlier than start_time",
        )),
        _ => Ok(()),
    }
}

pub fn validate_venue(venue: &Venue) -> Result<(), EventosServiceError> {
    require_text("name", &venue.name)?;
    require_text("street", &venue.street)?;
    require_non_negative("number", venue.number)?;
    require_text("neighborhood", &venue.neighborhood)?;
    require_text("city", &venue.city)?;
    require_text("state", &venue.state)?;
    require_text("postal_code", &venue.postal_code)?;
    require_non_negative("capacity", venue.capacity)?;
    Ok(())
}

/// Field checks plus the time window. Money is expected to be normalized
/// already; see [`normalize_money`].
pub fn validate_event(event: &Event) -> Result<(), EventosServiceError> {
    require_text("title", &event.title)?;
    validate_event_window(event.start_time, event.end_time)
}

pub fn validate_cost(cost: &Cost) -> Result<(), EventosServiceError> {
    require_text("description", &cost.description)
}
