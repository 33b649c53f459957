//! Domain profile entity

use super::schema::{BASE_REQUIRED_FIELDS, SPECIALIST_NOTES_FIELD, Schema};
use crate::core::error::DomainError;
use crate::provider::request::GenerationConfig;
use serde::Serialize;
use serde_json::{Map, Value};

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Default output token limit.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Upper bound of the provider's temperature range.
pub const MAX_TEMPERATURE: f64 = 2.0;

/// A provider content-filter directive.
///
/// Opaque key/value pairs, serialized exactly as given so fields such as
/// `method` reach the provider unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SafetySetting(pub Map<String, Value>);

impl SafetySetting {
    /// The common `{category, threshold}` directive.
    pub fn new(category: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self::default()
            .with_field("category", Value::String(category.into()))
            .with_field("threshold", Value::String(threshold.into()))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Everything needed to query the provider for one domain (Entity)
///
/// Profiles are built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainProfile {
    pub domain_id: String,
    /// Human-facing name, e.g. "Vision Lite"
    pub display_name: String,
    pub description: String,
    pub model: String,
    pub system_instruction: String,
    pub user_prompt: String,
    pub response_schema: Schema,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub safety_settings: Vec<SafetySetting>,
    /// Specialist profiles ask the provider for `specialistNotes`.
    pub specialist: bool,
}

impl DomainProfile {
    /// Create a profile with default generation parameters and a base analysis schema.
    pub fn new(
        domain_id: impl Into<String>,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        let domain_id = domain_id.into();
        Self {
            display_name: domain_id.clone(),
            domain_id,
            description: String::new(),
            model: model.into(),
            system_instruction: system_instruction.into(),
            user_prompt: user_prompt.into(),
            response_schema: super::schema::analysis_schema(false),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            safety_settings: Vec::new(),
            specialist: false,
        }
    }

    pub fn with_display(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.display_name = name.into();
        self.description = description.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_safety_setting(mut self, setting: SafetySetting) -> Self {
        self.safety_settings.push(setting);
        self
    }

    /// Mark the profile as specialist and switch to the schema requiring `specialistNotes`.
    pub fn specialist(mut self) -> Self {
        self.specialist = true;
        self.response_schema = super::schema::analysis_schema(true);
        self
    }

    pub fn is_specialist(&self) -> bool {
        self.specialist
    }

    /// Derived generation settings: computed on demand, never stored.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::json_output(
            self.temperature,
            self.max_output_tokens,
            self.response_schema.clone(),
        )
    }

    /// Check the invariants a registry entry must satisfy.
    pub fn check(&self) -> Result<(), DomainError> {
        let fail = |reason: &str| {
            Err(DomainError::InvalidProfile {
                domain_id: self.domain_id.clone(),
                reason: reason.to_string(),
            })
        };

        if self.domain_id.trim().is_empty() {
            return fail("domain id must not be empty");
        }
        if self.model.trim().is_empty() {
            return fail("model must not be empty");
        }
        if self.system_instruction.trim().is_empty() || self.user_prompt.trim().is_empty() {
            return fail("prompts must not be empty");
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return fail("temperature must lie in [0, 2]");
        }
        if self.max_output_tokens == 0 {
            return fail("max_output_tokens must be positive");
        }
        if let Some(missing) = BASE_REQUIRED_FIELDS
            .iter()
            .find(|f| !self.response_schema.requires(f))
        {
            return fail(&format!("schema must require '{missing}'"));
        }
        if self.specialist != self.response_schema.requires(SPECIALIST_NOTES_FIELD) {
            return fail("specialistNotes must be required exactly for specialist profiles");
        }
        Ok(())
    }
}
