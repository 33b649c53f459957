//! Built-in domain catalog.

use super::entities::DomainProfile;

/// Model used by every built-in profile.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// The fixed set of profiles shipped with the service.
pub fn builtin_profiles() -> Vec<DomainProfile> {
    vec![
        DomainProfile::new(
            "vision-pro",
            DEFAULT_MODEL,
            "You are Blink's enterprise vision analyst. Produce concise JSON responses that \
             summarize the scene, highlight key detected objects, and ensure bounding boxes are \
             aligned with real-world coordinates. Avoid embellishment beyond the image content.",
            "Review the uploaded image for enterprise insights. Identify notable objects, capture \
             short captions describing relevant regions, and offer an overall summary suitable for \
             operations teams.",
        )
        .with_display(
            "Vision Pro",
            "High fidelity scene understanding for enterprise use cases.",
        )
        .with_temperature(0.15)
        .with_max_output_tokens(800),
        DomainProfile::new(
            "vision-lite",
            DEFAULT_MODEL,
            "You are an assistant providing lightweight object detection and captions. \
             Focus on speed and provide only the most relevant results in JSON.",
            "Provide at most five key objects, brief captions for the overall scene, and a \
             one-sentence summary optimized for quick review.",
        )
        .with_display(
            "Vision Lite",
            "Cost-efficient model optimized for rapid prototyping.",
        )
        .with_temperature(0.25)
        .with_max_output_tokens(600),
        DomainProfile::new(
            "vision-medical",
            DEFAULT_MODEL,
            "You analyze medical imagery for Blink. Provide clinical-style summaries and highlight \
             noteworthy findings. Do not offer diagnoses, only describe observable evidence.",
            "Describe anatomical structures, anomalies, and notable regions with precise captions. \
             Include specialist notes for follow-up when necessary.",
        )
        .with_display(
            "Vision Medical",
            "Specialized diagnostics tuned for medical imaging workflows.",
        )
        .with_temperature(0.1)
        .with_max_output_tokens(900)
        .specialist(),
    ]
}
