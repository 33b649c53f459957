//! Upload checks applied before an image enters the pipeline.

use std::path::Path;
use thiserror::Error;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Errors raised for an unacceptable upload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("Uploaded file must be an image (got '{0}')")]
    NotAnImage(String),

    #[error("Image exceeds {limit_mb} MB limit")]
    TooLarge { limit_mb: u64 },
}

impl UploadError {
    /// Equivalent HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::TooLarge { .. } => 413,
            UploadError::Empty | UploadError::NotAnImage(_) => 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_bytes: u64,
}

impl UploadLimits {
    pub fn from_megabytes(mb: u64) -> Self {
        Self {
            max_bytes: mb.saturating_mul(BYTES_PER_MB),
        }
    }

    pub fn max_megabytes(&self) -> u64 {
        self.max_bytes / BYTES_PER_MB
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::from_megabytes(8)
    }
}

/// Reject non-image content types, empty payloads and oversized payloads.
pub fn validate_upload(
    mime_type: &str,
    bytes: &[u8],
    limits: &UploadLimits,
) -> Result<(), UploadError> {
    if !mime_type.starts_with("image/") {
        return Err(UploadError::NotAnImage(mime_type.to_string()));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if bytes.len() as u64 > limits.max_bytes {
        return Err(UploadError::TooLarge {
            limit_mb: limits.max_megabytes(),
        });
    }
    Ok(())
}

/// Content type implied by a file extension.
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
