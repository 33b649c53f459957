//! Domain layer for blink
//!
//! This crate contains the core transformation pipeline between a client
//! upload and the generative vision provider. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Domain profiles
//!
//! A domain identifier (e.g. `vision-lite`) selects a [`DomainProfile`]:
//! model, prompts, output schema and generation parameters. Profiles live in
//! an immutable [`DomainRegistry`] built once at startup.
//!
//! ## Provider contract
//!
//! - [`build_request`] turns a profile and raw image bytes into a [`ProviderRequest`]
//! - [`extract_payload`] walks the provider [`RawEnvelope`] down to the embedded JSON
//!
//! ## Analysis
//!
//! - [`validate_analysis`] is the authoritative shape gate for provider output
//! - [`assemble_response`] builds the client-facing [`ProcessResponse`]

pub mod analysis;
pub mod core;
pub mod profile;
pub mod provider;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    entities::{AnalysisResult, BoundingBox, DetectedObject},
    response::{ProcessResponse, assemble_response},
    validation::validate_analysis,
};
pub use core::error::{DomainError, ShapeViolation};
pub use profile::{
    catalog::builtin_profiles,
    entities::{DomainProfile, SafetySetting},
    registry::DomainRegistry,
    schema::{Schema, analysis_schema},
};
pub use provider::{
    envelope::{RawEnvelope, extract_payload, extract_text, parse_payload},
    request::{GenerationConfig, InlineData, ProviderRequest, RequestPart, build_request},
};
