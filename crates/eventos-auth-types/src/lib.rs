//! Auth types for the eventos service.
//!
//! Provides bearer-token issuing/validation and the `Identity` extractor.

pub mod identity;
pub mod token;
