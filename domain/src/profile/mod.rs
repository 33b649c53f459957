//! Domain profiles: what to ask the provider for each domain identifier.
//!
//! - [`entities::DomainProfile`]: model, prompts, schema, generation parameters
//! - [`schema::Schema`]: structural description of the expected JSON output
//! - [`registry::DomainRegistry`]: immutable id → profile lookup table
//! - [`catalog`]: the built-in profile set

pub mod catalog;
pub mod entities;
pub mod registry;
pub mod schema;
