//! Response assembler

use super::entities::{AnalysisResult, DetectedObject};
use crate::profile::entities::DomainProfile;
use serde::Serialize;

/// Client-facing result of one processed image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub domain_id: String,
    pub model: String,
    pub summary: String,
    pub captions: Vec<String>,
    pub objects: Vec<DetectedObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_remaining: Option<u64>,
}

/// Combine profile metadata, the validated analysis and the credit hint.
///
/// Credits come from the provider when it reported them, otherwise from the
/// configured fallback.
pub fn assemble_response(
    profile: &DomainProfile,
    analysis: AnalysisResult,
    credits_from_provider: Option<u64>,
    fallback_credits: Option<u64>,
) -> ProcessResponse {
    let AnalysisResult {
        summary,
        captions,
        objects,
        specialist_notes,
    } = analysis;

    ProcessResponse {
        domain_id: profile.domain_id.clone(),
        model: profile.model.clone(),
        summary,
        captions,
        objects,
        specialist_notes,
        credits_remaining: credits_from_provider.or(fallback_credits),
    }
}
