//! Gemini gateway implementation
//!
//! One POST per call, no retries. The API key travels as the `key` query
//! parameter and is stripped from any transport error before it is surfaced.

use super::errors::error_message;
use super::headers::credits_remaining;
use super::settings::GeminiSettings;
use async_trait::async_trait;
use blink_application::ports::vision_gateway::{GatewayError, GatewayReply, VisionGateway};
use blink_domain::util::preview;
use blink_domain::{ProviderRequest, RawEnvelope};
use tracing::{debug, info, warn};

/// Maximum body excerpt written to logs.
const LOG_PREVIEW_BYTES: usize = 256;

/// [`VisionGateway`] backed by the Gemini REST API.
///
/// `reqwest::Client` pools connections internally and is shared by every
/// concurrent call.
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(client: reqwest::Client, settings: GeminiSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    let error = error.without_url();
    if error.is_timeout() {
        GatewayError::Unreachable("request timed out".to_string())
    } else {
        GatewayError::Unreachable(error.to_string())
    }
}

#[async_trait]
impl VisionGateway for GeminiGateway {
    async fn generate(
        &self,
        model: &str,
        request: &ProviderRequest,
    ) -> Result<GatewayReply, GatewayError> {
        let api_key = self.settings.api_key().ok_or(GatewayError::NotConfigured)?;
        let url = self.settings.endpoint(model);

        debug!(%model, timeout = ?self.settings.timeout, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .timeout(self.settings.timeout)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body = %preview(&body, LOG_PREVIEW_BYTES),
                "Provider returned an error"
            );
            return Err(GatewayError::ProviderError {
                status_code: status.as_u16(),
                message: error_message(&body),
            });
        }

        let credits = credits_remaining(response.headers());
        let body = response.bytes().await.map_err(transport_error)?;
        let envelope: RawEnvelope = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::InvalidEnvelope(e.to_string()))?;

        info!(%model, credits = ?credits, "Provider responded");
        Ok(GatewayReply::new(envelope).with_credits(credits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blink_domain::{DomainRegistry, build_request};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/models/gemini-2.0-flash:generateContent";

    fn request() -> ProviderRequest {
        let registry = DomainRegistry::builtin();
        let profile = registry.lookup("vision-lite").unwrap();
        build_request(profile, b"\xFF\xD8\xFF", "image/jpeg")
    }

    fn gateway(server: &MockServer) -> GeminiGateway {
        GeminiGateway::new(
            GeminiSettings::new(Some("test-key".to_string())).with_base_url(server.uri()),
        )
    }

    fn candidate_body(text: &str) -> serde_json::Value {
        json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
    }

    #[tokio::test]
    async fn test_successful_call_returns_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user"}],
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{}")))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway(&server)
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap();

        assert_eq!(reply.envelope, RawEnvelope::from_text("{}"));
        assert_eq!(reply.credits_remaining, None);
    }

    #[tokio::test]
    async fn test_credit_header_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_body("{}"))
                    .insert_header("x-blink-credits-remaining", "42"),
            )
            .mount(&server)
            .await;

        let reply = gateway(&server)
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap();
        assert_eq!(reply.credits_remaining, Some(42));
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"error": {"message": "Resource exhausted"}})),
            )
            .mount(&server)
            .await;

        let err = gateway(&server)
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::ProviderError {
                status_code: 429,
                message: "Resource exhausted".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_plain_text_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::ProviderError {
                status_code: 500,
                message: "backend exploded".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::ProviderError {
                status_code: 403,
                message: crate::gemini::errors::FALLBACK_ERROR_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new(GeminiSettings::new(None).with_base_url(server.uri()));
        let err = gateway
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::NotConfigured);
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        let gateway = GeminiGateway::new(
            GeminiSettings::new(Some("test-key".to_string())).with_base_url("http://127.0.0.1:1"),
        );
        let err = gateway
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Unreachable(_)));
        assert!(!err.to_string().contains("test-key"));
    }

    #[tokio::test]
    async fn test_timeout_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_body("{}"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new(
            GeminiSettings::new(Some("test-key".to_string()))
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(50)),
        );
        let err = gateway
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Unreachable("request timed out".to_string()));
    }

    #[tokio::test]
    async fn test_unreadable_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .generate("gemini-2.0-flash", &request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidEnvelope(_)));
    }
}
