//! Infrastructure layer for blink
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading and
//! upload checks.

pub mod config;
pub mod gemini;
pub mod upload;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileCreditsConfig, FileGeminiConfig, FileUploadConfig,
};
pub use gemini::{
    gateway::GeminiGateway,
    headers::{CREDIT_HEADERS, credits_remaining},
    settings::GeminiSettings,
};
pub use upload::{UploadError, UploadLimits, guess_mime_type, validate_upload};
