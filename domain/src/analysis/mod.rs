//! Analysis produced by the provider and the response sent back to clients.
//!
//! - [`entities`]: validated [`AnalysisResult`](entities::AnalysisResult) and its parts
//! - [`validation`]: the authoritative structural gate for provider output
//! - [`response`]: final [`ProcessResponse`](response::ProcessResponse) assembly

pub mod entities;
pub mod response;
pub mod validation;
