//! Domain error types

use thiserror::Error;

/// Why a field of the provider's analysis payload was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeViolation {
    #[error("field is required")]
    Missing,

    #[error("expected {expected}")]
    WrongType { expected: &'static str },

    #[error("label must not be empty")]
    EmptyLabel,

    #[error("value {value} is outside [0, 1]")]
    OutOfRange { value: f64 },
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("Invalid profile '{domain_id}': {reason}")]
    InvalidProfile { domain_id: String, reason: String },

    #[error("Provider returned no candidates")]
    NoCandidates,

    #[error("Provider response missing JSON payload")]
    NoTextPart,

    #[error("Provider returned malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Invalid analysis at '{field}': {reason}")]
    InvalidAnalysisShape {
        field: String,
        reason: ShapeViolation,
    },
}

impl DomainError {
    pub(crate) fn shape(field: impl Into<String>, reason: ShapeViolation) -> Self {
        DomainError::InvalidAnalysisShape {
            field: field.into(),
            reason,
        }
    }

    /// True when the provider answered but did not give us what we asked for.
    pub fn is_provider_fault(&self) -> bool {
        matches!(
            self,
            DomainError::NoCandidates
                | DomainError::NoTextPart
                | DomainError::MalformedJson(_)
                | DomainError::InvalidAnalysisShape { .. }
        )
    }

    /// The shape violation carried by [`DomainError::InvalidAnalysisShape`], if any.
    pub fn shape_violation(&self) -> Option<&ShapeViolation> {
        match self {
            DomainError::InvalidAnalysisShape { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
