//! Console output formatter for analysis results

use crate::output::formatter::OutputFormatter;
use blink_domain::{DetectedObject, DomainRegistry, ProcessResponse};
use colored::Colorize;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format as pretty-printed JSON (client contract)
    pub fn format_json(response: &ProcessResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a readable summary
    pub fn format_summary(response: &ProcessResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Blink · {}", response.domain_id)));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), response.model));
        if let Some(credits) = response.credits_remaining {
            output.push_str(&format!("{} {}\n", "Credits remaining:".cyan().bold(), credits));
        }
        output.push('\n');

        output.push_str(&format!("{}\n{}\n", "Summary".cyan().bold(), response.summary));

        if !response.captions.is_empty() {
            output.push_str(&Self::section_header("Captions"));
            for caption in &response.captions {
                output.push_str(&format!("  * {}\n", caption));
            }
        }

        output.push_str(&Self::section_header("Objects"));
        if response.objects.is_empty() {
            output.push_str(&format!("  {}\n", "(none detected)".dimmed()));
        }
        for object in &response.objects {
            output.push_str(&Self::object_line(object));
        }

        if let Some(notes) = &response.specialist_notes {
            output.push_str(&Self::section_header("Specialist Notes"));
            for note in notes {
                output.push_str(&format!("  * {}\n", note));
            }
        }

        output
    }

    /// One line per registered domain
    pub fn format_domains(registry: &DomainRegistry) -> String {
        let mut output = String::new();
        for profile in registry.list_all().values() {
            let marker = if profile.is_specialist() { " (specialist)" } else { "" };
            output.push_str(&format!(
                "{} {:<16} {}{}\n",
                format!("{:<16}", profile.domain_id).yellow().bold(),
                profile.model,
                profile.description,
                marker.dimmed()
            ));
        }
        output
    }

    fn object_line(object: &DetectedObject) -> String {
        let confidence = format!("{:>5.1}%", object.confidence * 100.0);
        match &object.bounding_box {
            Some(b) => format!(
                "  {} {} {}\n",
                confidence.green(),
                object.label.bold(),
                format!(
                    "[x={:.2} y={:.2} w={:.2} h={:.2}]",
                    b.x, b.y, b.width, b.height
                )
                .dimmed()
            ),
            None => format!("  {} {}\n", confidence.green(), object.label.bold()),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_json(&self, response: &ProcessResponse) -> String {
        ConsoleFormatter::format_json(response)
    }

    fn format_summary(&self, response: &ProcessResponse) -> String {
        ConsoleFormatter::format_summary(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blink_domain::BoundingBox;

    fn response() -> ProcessResponse {
        ProcessResponse {
            domain_id: "vision-medical".to_string(),
            model: "gemini-2.0-flash".to_string(),
            summary: "chest x-ray".to_string(),
            captions: vec!["frontal view".to_string()],
            objects: vec![DetectedObject {
                label: "rib".to_string(),
                confidence: 0.8,
                bounding_box: Some(BoundingBox {
                    x: 0.1,
                    y: 0.2,
                    width: 0.3,
                    height: 0.4,
                }),
            }],
            specialist_notes: Some(vec!["compare with prior".to_string()]),
            credits_remaining: Some(42),
        }
    }

    #[test]
    fn test_json_uses_client_field_names() {
        let json = ConsoleFormatter::format_json(&response());
        assert!(json.contains("\"domainId\": \"vision-medical\""));
        assert!(json.contains("\"creditsRemaining\": 42"));
        assert!(json.contains("\"boundingBox\""));
    }

    #[test]
    fn test_summary_includes_sections() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_summary(&response());
        assert!(text.contains("Model: gemini-2.0-flash"));
        assert!(text.contains("Credits remaining: 42"));
        assert!(text.contains("  * frontal view"));
        assert!(text.contains("80.0% rib [x=0.10 y=0.20 w=0.30 h=0.40]"));
        assert!(text.contains("Specialist Notes"));
    }

    #[test]
    fn test_summary_without_objects() {
        colored::control::set_override(false);
        let mut response = response();
        response.objects.clear();
        response.specialist_notes = None;
        let text = ConsoleFormatter::format_summary(&response);
        assert!(text.contains("(none detected)"));
        assert!(!text.contains("Specialist Notes"));
    }

    #[test]
    fn test_domain_listing() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_domains(&DomainRegistry::builtin());
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("vision-medical"));
        assert!(text.contains("(specialist)"));
    }
}
