pub mod cost;
pub mod event;
pub mod token;
pub mod user;
pub mod venue;
