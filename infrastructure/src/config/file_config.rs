//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! convert into the read-only runtime values the rest of the process uses.

use crate::gemini::settings::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GeminiSettings};
use crate::upload::UploadLimits;
use blink_application::ProcessConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider connection settings (`[gemini]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key (prefer the `GEMINI_API_KEY` environment variable)
    pub api_key: Option<String>,
    pub api_url: String,
    pub request_timeout_seconds: f64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: 40.0,
        }
    }
}

/// Upload limits (`[upload]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUploadConfig {
    pub max_size_mb: u64,
}

impl Default for FileUploadConfig {
    fn default() -> Self {
        Self { max_size_mb: 8 }
    }
}

/// Credit reporting (`[credits]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCreditsConfig {
    /// Reported when the provider sends no credit header
    pub default_remaining: Option<u64>,
}

/// A problem found in an otherwise parseable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gemini: FileGeminiConfig,
    pub upload: FileUploadConfig,
    pub credits: FileCreditsConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let mut push = |field: &str, message: &str| {
            issues.push(ConfigIssue {
                field: field.to_string(),
                message: message.to_string(),
            })
        };

        if self.gemini.api_key().is_none() {
            push("gemini.api_key", "no API key configured; set GEMINI_API_KEY");
        }
        let url = &self.gemini.api_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            push("gemini.api_url", "must be an http(s) URL");
        }
        if self.gemini.request_timeout().is_none() {
            push(
                "gemini.request_timeout_seconds",
                "must be a positive number of seconds within range; using the default",
            );
        }
        if self.upload.max_size_mb == 0 {
            push("upload.max_size_mb", "must be positive; using the default");
        }

        issues
    }

    pub fn gemini_settings(&self) -> GeminiSettings {
        let timeout = self.gemini.request_timeout().unwrap_or(DEFAULT_TIMEOUT);

        GeminiSettings::new(self.gemini.api_key.clone())
            .with_base_url(&self.gemini.api_url)
            .with_timeout(timeout)
    }

    pub fn upload_limits(&self) -> UploadLimits {
        match self.upload.max_size_mb {
            0 => UploadLimits::default(),
            mb => UploadLimits::from_megabytes(mb),
        }
    }

    pub fn process_config(&self) -> ProcessConfig {
        ProcessConfig::default().with_fallback_credits(self.credits.default_remaining)
    }
}

impl FileGeminiConfig {
    /// The configured timeout, or `None` when it is not positive or does not fit a `Duration`.
    fn request_timeout(&self) -> Option<Duration> {
        Some(self.request_timeout_seconds)
            .filter(|s| *s > 0.0)
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
