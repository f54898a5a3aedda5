pub mod cost;
pub mod event;
pub mod health;
pub mod token;
pub mod user;
pub mod venue;
