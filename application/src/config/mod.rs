//! Application-level configuration.
//!
//! Values here are read once at startup and treated as read-only.

/// Configuration for [`ProcessImageUseCase`](crate::ProcessImageUseCase).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Credits reported to clients when the provider does not send a hint.
    pub fallback_credits: Option<u64>,
}

impl ProcessConfig {
    pub fn with_fallback_credits(mut self, credits: Option<u64>) -> Self {
        self.fallback_credits = credits;
        self
    }
}
