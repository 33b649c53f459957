//! Output formatter trait

use blink_domain::ProcessResponse;

/// Trait for formatting analysis results
pub trait OutputFormatter {
    /// Format as the client JSON contract
    fn format_json(&self, response: &ProcessResponse) -> String;

    /// Format as a human-readable summary
    fn format_summary(&self, response: &ProcessResponse) -> String;
}
