//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: failures of the pure transformation pipeline
//! - [`error::ShapeViolation`]: why a provider payload failed validation

pub mod error;
