//! SeaORM entities for the eventos database.

pub mod costs;
pub mod events;
pub mod users;
pub mod venues;
