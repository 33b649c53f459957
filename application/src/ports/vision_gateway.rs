//! Vision gateway port
//!
//! Defines the interface for sending a built request to the vision provider.

use async_trait::async_trait;
use blink_domain::{ProviderRequest, RawEnvelope};
use thiserror::Error;

/// Errors that can occur during provider gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Provider API key is not configured")]
    NotConfigured,

    #[error("Provider service unreachable: {0}")]
    Unreachable(String),

    #[error("Provider error ({status_code}): {message}")]
    ProviderError { status_code: u16, message: String },

    #[error("Provider returned an unreadable envelope: {0}")]
    InvalidEnvelope(String),
}

impl GatewayError {
    /// Only transport failures are worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Unreachable(_))
    }
}

/// Successful provider exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReply {
    pub envelope: RawEnvelope,
    /// Advisory remaining-quota hint read from response headers
    pub credits_remaining: Option<u64>,
}

impl GatewayReply {
    pub fn new(envelope: RawEnvelope) -> Self {
        Self {
            envelope,
            credits_remaining: None,
        }
    }

    pub fn with_credits(mut self, credits: Option<u64>) -> Self {
        self.credits_remaining = credits;
        self
    }
}

/// Gateway to the generative vision provider
///
/// Implementations (adapters) live in the infrastructure layer. They hold
/// credentials, base URL and timeout, and perform exactly one call per
/// invocation with no retries.
#[async_trait]
pub trait VisionGateway: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        request: &ProviderRequest,
    ) -> Result<GatewayReply, GatewayError>;
}
