//! Configuration loading for blink
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`GEMINI_API_KEY`, `GEMINI_API_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./blink.toml` or `./.blink.toml`
//! 4. Global: `$XDG_CONFIG_HOME/blink/config.toml` (or platform equivalent)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileCreditsConfig, FileGeminiConfig, FileUploadConfig,
};
pub use loader::{ConfigLoader, ENV_KEYS};
