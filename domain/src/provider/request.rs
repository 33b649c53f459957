//! Request builder: profile + image bytes → provider request body.

use crate::profile::entities::{DomainProfile, SafetySetting};
use crate::profile::schema::Schema;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

/// Mime type that forces the provider into JSON output mode.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Role of the single conversational turn we send.
pub const USER_ROLE: &str = "user";

/// Inline binary attachment (base64-encoded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// One part of a content turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

impl RequestPart {
    pub fn text(text: impl Into<String>) -> Self {
        RequestPart::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<RequestPart>,
}

/// Generation constraints sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
    pub response_schema: Schema,
}

impl GenerationConfig {
    pub fn json_output(temperature: f64, max_output_tokens: u32, response_schema: Schema) -> Self {
        Self {
            temperature,
            max_output_tokens,
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema,
        }
    }
}

/// Complete `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub contents: Vec<Content>,
    pub system_instruction: SystemInstruction,
    pub generation_config: GenerationConfig,
    /// Omitted from the body when empty; some providers reject `[]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
}

impl ProviderRequest {
    /// The inline image attached to the user turn, if any.
    pub fn inline_image(&self) -> Option<&InlineData> {
        self.contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .find_map(|part| match part {
                RequestPart::InlineData { inline_data } => Some(inline_data),
                RequestPart::Text { .. } => None,
            })
    }
}

/// Build the provider request for `profile`.
///
/// `mime_type` is forwarded verbatim; content-type policing happens upstream.
pub fn build_request(
    profile: &DomainProfile,
    image_bytes: &[u8],
    mime_type: &str,
) -> ProviderRequest {
    let inline_data = InlineData {
        mime_type: mime_type.to_string(),
        data: STANDARD.encode(image_bytes),
    };

    ProviderRequest {
        contents: vec![Content {
            role: USER_ROLE.to_string(),
            parts: vec![
                RequestPart::text(&profile.user_prompt),
                RequestPart::InlineData { inline_data },
            ],
        }],
        system_instruction: SystemInstruction {
            parts: vec![RequestPart::text(&profile.system_instruction)],
        },
        generation_config: profile.generation_config(),
        safety_settings: profile.safety_settings.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::registry::DomainRegistry;
    use serde_json::json;

    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    fn lite() -> DomainProfile {
        DomainRegistry::builtin().lookup("vision-lite").unwrap().clone()
    }

    #[test]
    fn test_body_shape() {
        let profile = lite();
        let request = build_request(&profile, b"abc", "image/png");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], json!(profile.user_prompt));
        assert_eq!(
            body["contents"][0]["parts"][1]["inline_data"],
            json!({"mime_type": "image/png", "data": "YWJj"})
        );
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            json!(profile.system_instruction)
        );
        assert_eq!(body["generationConfig"]["temperature"], json!(0.25));
        assert_eq!(body["generationConfig"]["maxOutputTokens"], json!(600));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["summary", "captions", "objects"])
        );
    }

    #[test]
    fn test_safety_settings_omitted_when_empty() {
        let body = serde_json::to_value(build_request(&lite(), b"x", "image/jpeg")).unwrap();
        assert!(body.get("safetySettings").is_none());
    }

    #[test]
    fn test_safety_settings_attached_when_present() {
        let profile = lite()
            .with_safety_setting(SafetySetting::new(
                "HARM_CATEGORY_DANGEROUS_CONTENT",
                "BLOCK_ONLY_HIGH",
            ))
            .with_safety_setting(
                SafetySetting::new("HARM_CATEGORY_HARASSMENT", "BLOCK_LOW_AND_ABOVE")
                    .with_field("method", "SEVERITY"),
            );
        let body = serde_json::to_value(build_request(&profile, b"x", "image/jpeg")).unwrap();
        assert_eq!(
            body["safetySettings"],
            json!([
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_ONLY_HIGH"},
                {
                    "category": "HARM_CATEGORY_HARASSMENT",
                    "threshold": "BLOCK_LOW_AND_ABOVE",
                    "method": "SEVERITY"
                }
            ])
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let profile = lite();
        let a = build_request(&profile, JPEG_HEADER, "image/jpeg");
        let b = build_request(&profile, JPEG_HEADER, "image/jpeg");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_inline_data_round_trips() {
        let request = build_request(&lite(), JPEG_HEADER, "image/jpeg");
        let inline = request.inline_image().unwrap();
        assert_eq!(STANDARD.decode(&inline.data).unwrap(), JPEG_HEADER);
    }

    #[test]
    fn test_unexpected_mime_passed_through() {
        let request = build_request(&lite(), b"x", "application/octet-stream");
        assert_eq!(
            request.inline_image().unwrap().mime_type,
            "application/octet-stream"
        );
    }
}
