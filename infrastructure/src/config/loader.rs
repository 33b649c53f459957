//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["blink.toml", ".blink.toml"];

/// Read verbatim as a string; typed parsing would turn a numeric key into an integer.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variables understood by the service and the key each one sets.
pub const ENV_KEYS: [(&str, &str); 5] = [
    ("GEMINI_API_KEY", "gemini.api_key"),
    ("GEMINI_API_URL", "gemini.api_url"),
    ("GEMINI_REQUEST_TIMEOUT", "gemini.request_timeout_seconds"),
    ("MAX_UPLOAD_SIZE_MB", "upload.max_size_mb"),
    ("DEFAULT_CREDITS_REMAINING", "credits.default_remaining"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables listed in [`ENV_KEYS`]
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./blink.toml` or `./.blink.toml`
    /// 4. Global: `<config dir>/blink/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::merge_env(figment).extract().map_err(Box::new)
    }

    /// Defaults plus environment only (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::merge_env(figment).extract().map_err(Box::new)
    }

    fn merge_env(figment: Figment) -> Figment {
        let env = Env::raw().filter_map(|key| {
            ENV_KEYS
                .iter()
                .filter(|(var, _)| *var != API_KEY_VAR)
                .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                .map(|(_, path)| (*path).into())
        });

        let figment = figment.merge(env);
        match std::env::var(API_KEY_VAR) {
            Ok(key) => figment.merge(Serialized::default("gemini.api_key", key)),
            Err(_) => figment,
        }
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("blink").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources being used (for --show-config)
    pub fn describe_sources() -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        for (var, _) in ENV_KEYS {
            let state = if std::env::var_os(var).is_some() { "SET  " } else { "     " };
            out.push_str(&format!("  [{state}] Env:     {var}\n"));
        }

        match Self::project_config_path() {
            Some(path) => out.push_str(&format!("  [FOUND] Project: {}\n", path.display())),
            None => out.push_str("  [     ] Project: ./blink.toml or ./.blink.toml\n"),
        }

        if let Some(path) = Self::global_config_path() {
            let state = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{state}] Global:  {}\n", path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}
