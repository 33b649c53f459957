//! Response extractor: provider envelope → embedded JSON payload.
//!
//! The walk is `candidates[0] → content → parts[*] → text`, one fallible
//! step at a time so each failure keeps its own name.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Successful `generateContent` response body.
///
/// Every level is optional; missing structure is reported by [`extract_text`],
/// not by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(
        default,
        rename = "finishReason",
        skip_serializing_if = "Option::is_none"
    )]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<ResponsePart>>,
}

/// A response part. Non-text parts (inline data, function calls) deserialize
/// with `text == None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RawEnvelope {
    /// Envelope with a single candidate carrying one text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![ResponsePart {
                        text: Some(text.into()),
                    }]),
                }),
                finish_reason: None,
            }]),
        }
    }
}

/// Locate the first non-empty text part of the first candidate.
pub fn extract_text(envelope: &RawEnvelope) -> Result<&str, DomainError> {
    let candidate = envelope
        .candidates
        .as_deref()
        .and_then(|c| c.first())
        .ok_or(DomainError::NoCandidates)?;

    let parts = candidate
        .content
        .as_ref()
        .and_then(|c| c.parts.as_deref())
        .unwrap_or_default();

    parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .find(|t| !t.is_empty())
        .ok_or(DomainError::NoTextPart)
}

/// Parse the extracted text as JSON.
pub fn parse_payload(text: &str) -> Result<serde_json::Value, DomainError> {
    serde_json::from_str(text).map_err(|e| DomainError::MalformedJson(e.to_string()))
}

/// [`extract_text`] followed by [`parse_payload`].
pub fn extract_payload(envelope: &RawEnvelope) -> Result<serde_json::Value, DomainError> {
    parse_payload(extract_text(envelope)?)
}
