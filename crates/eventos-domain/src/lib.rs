//! Domain types shared across the eventos crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts to and from
//! the raw column types at the boundary.

pub mod event_status;
pub mod id;
