//! Process Image use case
//!
//! Runs one upload through the pipeline:
//! registry lookup → request build → provider call → extraction → validation → assembly.

use crate::config::ProcessConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use crate::ports::vision_gateway::{GatewayError, VisionGateway};
use blink_domain::{
    DomainError, DomainRegistry, ProcessResponse, assemble_response, build_request,
    extract_payload, validate_analysis,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while processing an image
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessImageError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Boundary status class for a failure.
///
/// The outer surface (HTTP, CLI) maps this to its own status space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Internal,
    UpstreamUnavailable,
    BadGateway,
    /// Upstream status reflected as-is
    Upstream(u16),
    Cancelled,
}

impl ErrorClass {
    /// Equivalent HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorClass::BadRequest => 400,
            ErrorClass::NotFound => 404,
            ErrorClass::Internal => 500,
            ErrorClass::UpstreamUnavailable => 503,
            ErrorClass::BadGateway => 502,
            ErrorClass::Upstream(status) => *status,
            ErrorClass::Cancelled => 499,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl ProcessImageError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ProcessImageError::Domain(DomainError::UnknownDomain(_)) => ErrorClass::NotFound,
            ProcessImageError::Domain(DomainError::InvalidProfile { .. }) => ErrorClass::Internal,
            ProcessImageError::Domain(_) => ErrorClass::BadGateway,
            ProcessImageError::Gateway(GatewayError::NotConfigured) => ErrorClass::Internal,
            ProcessImageError::Gateway(GatewayError::Unreachable(_)) => {
                ErrorClass::UpstreamUnavailable
            }
            ProcessImageError::Gateway(GatewayError::ProviderError { status_code, .. }) => {
                ErrorClass::Upstream(*status_code)
            }
            ProcessImageError::Gateway(GatewayError::InvalidEnvelope(_)) => ErrorClass::BadGateway,
            ProcessImageError::Cancelled => ErrorClass::Cancelled,
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProcessImageError::Cancelled)
    }
}

/// Input for the ProcessImage use case
#[derive(Debug, Clone)]
pub struct ProcessImageInput {
    pub domain_id: String,
    pub image_bytes: Vec<u8>,
    pub mime_type: String,
}

impl ProcessImageInput {
    pub fn new(
        domain_id: impl Into<String>,
        image_bytes: impl Into<Vec<u8>>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            image_bytes: image_bytes.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Use case for analyzing one uploaded image
///
/// Holds only shared read-only state, so one instance serves any number of
/// concurrent requests.
pub struct ProcessImageUseCase<G: VisionGateway + 'static> {
    gateway: Arc<G>,
    registry: Arc<DomainRegistry>,
    config: ProcessConfig,
}

impl<G: VisionGateway + 'static> ProcessImageUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: Arc<DomainRegistry>, config: ProcessConfig) -> Self {
        Self {
            gateway,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: ProcessImageInput,
    ) -> Result<ProcessResponse, ProcessImageError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute, abandoning the in-flight provider call as soon as `cancel` fires.
    pub async fn execute_cancellable(
        &self,
        input: ProcessImageInput,
        progress: &dyn ProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<ProcessResponse, ProcessImageError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Image processing cancelled");
                Err(ProcessImageError::Cancelled)
            }
            result = self.execute_with_progress(input, progress) => result,
        }
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ProcessImageInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ProcessResponse, ProcessImageError> {
        progress.on_stage_start(Stage::Preparing);
        let profile = match self.registry.lookup(&input.domain_id) {
            Ok(profile) => profile,
            Err(e) => {
                progress.on_stage_complete(Stage::Preparing, false);
                return Err(e.into());
            }
        };

        info!(
            domain = %profile.domain_id,
            model = %profile.model,
            bytes = input.image_bytes.len(),
            mime = %input.mime_type,
            "Processing image"
        );

        let request = build_request(profile, &input.image_bytes, &input.mime_type);
        progress.on_stage_complete(Stage::Preparing, true);

        progress.on_stage_start(Stage::Provider);
        let reply = self.gateway.generate(&profile.model, &request).await;
        progress.on_stage_complete(Stage::Provider, reply.is_ok());
        let reply = reply
            .inspect_err(|e| warn!(domain = %profile.domain_id, "Provider call failed: {}", e))?;

        progress.on_stage_start(Stage::Validating);
        let analysis = extract_payload(&reply.envelope)
            .and_then(|payload| validate_analysis(&payload, profile));
        progress.on_stage_complete(Stage::Validating, analysis.is_ok());
        let analysis = analysis.inspect_err(|e| {
            warn!(domain = %profile.domain_id, "Provider output rejected: {}", e)
        })?;

        debug!(
            objects = analysis.objects.len(),
            captions = analysis.captions.len(),
            credits = ?reply.credits_remaining,
            "Analysis validated"
        );

        Ok(assemble_response(
            profile,
            analysis,
            reply.credits_remaining,
            self.config.fallback_credits,
        ))
    }
}
