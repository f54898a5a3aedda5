//! HTTP plumbing shared by the eventos binaries: error envelope, JSON body and
//! path extraction, request-id/trace middleware, health and tracing setup.

pub mod error;
pub mod health;
pub mod json;
pub mod middleware;
pub mod path;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
