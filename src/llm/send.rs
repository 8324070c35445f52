//! Outbound side: the `generateContent` request body and the HTTP backend.

use crate::llm::config::GatewayConfig;
use crate::llm::error::{GatewayError, GatewayResult};
use crate::llm::receive::GenerateContentResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Sampling parameters used for every Crumble request.
    pub const CRUMBLE: GenerationConfig = GenerationConfig {
        temperature: 0.7,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 150,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::CRUMBLE
    }
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: GenerationConfig::CRUMBLE,
        }
    }

    pub fn prompt_text(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// Anything able to answer a `generateContent` request.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GatewayResult<GenerateContentResponse>;
}

/// Talks to the hosted Gemini endpoint over HTTPS.
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    timeout_seconds: u64,
}

impl GeminiClient {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let endpoint = config.endpoint()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GatewayError::Config {
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            timeout_seconds: config.request_timeout_seconds,
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GatewayResult<GenerateContentResponse> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(e, self.timeout_seconds))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = status.as_u16(), body = %body, "Generation API error");
            return Err(GatewayError::Status { status, body });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GatewayError::from_reqwest(e, self.timeout_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::config::GatewayConfigBuilder;
    use crate::llm::test_server::{self, Reply};
    use std::time::{Duration, Instant};

    fn client_for(base: &str, timeout_seconds: u64) -> GeminiClient {
        let config = GatewayConfigBuilder::new()
            .with_api_key("test-key")
            .with_api_url_base(base)
            .with_request_timeout_seconds(timeout_seconds)
            .build()
            .unwrap();
        GeminiClient::new(&config).unwrap()
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateContentRequest::from_prompt("bake me a pie");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "bake me a pie");
        let gen = &value["generationConfig"];
        assert_eq!(gen["topK"], 40);
        assert_eq!(gen["maxOutputTokens"], 150);
        assert!((gen["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((gen["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_prompt_text() {
        let request = GenerateContentRequest::from_prompt("hello");
        assert_eq!(request.prompt_text(), Some("hello"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let config = GatewayConfigBuilder::new().build().unwrap();
        let client = GeminiClient::new(&config).unwrap();

        let result = client
            .generate(&GenerateContentRequest::from_prompt("hi"))
            .await;
        assert!(matches!(result, Err(GatewayError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let config = GatewayConfigBuilder::new()
            .with_api_key("test-key")
            .with_api_url_base("http://127.0.0.1:9/v1beta/models")
            .with_request_timeout_seconds(2)
            .build()
            .unwrap();
        let client = GeminiClient::new(&config).unwrap();

        let result = client
            .generate(&GenerateContentRequest::from_prompt("hi"))
            .await;
        match result {
            Err(GatewayError::Transport { reason }) => assert!(!reason.contains("test-key")),
            Err(GatewayError::Timeout { .. }) => {}
            other => panic!("expected a transport failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let base = test_server::serve(Reply::status(500, "backend exploded")).await;
        let client = client_for(&base, 5);

        let result = client
            .generate(&GenerateContentRequest::from_prompt("hi"))
            .await;
        match result {
            Err(GatewayError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let base = test_server::serve(Reply::json("<html>definitely not json</html>")).await;
        let client = client_for(&base, 5);

        let result = client
            .generate(&GenerateContentRequest::from_prompt("hi"))
            .await;
        assert!(matches!(result, Err(GatewayError::Malformed { .. })), "{:?}", result);
    }

    #[tokio::test]
    async fn test_silent_endpoint_times_out() {
        let base = test_server::serve(Reply::Hang).await;
        let client = client_for(&base, 1);

        let start = Instant::now();
        let result = client
            .generate(&GenerateContentRequest::from_prompt("hi"))
            .await;
        let elapsed = start.elapsed();

        assert!(matches!(result, Err(GatewayError::Timeout { seconds: 1 })), "{:?}", result);
        assert!(elapsed >= Duration::from_millis(900), "{:?}", elapsed);
        assert!(elapsed < Duration::from_secs(5), "{:?}", elapsed);
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let base = test_server::serve(Reply::json(
            r#"{"candidates":[{"content":{"parts":[{"text":"Chill the dough first."}]}}]}"#,
        ))
        .await;
        let client = client_for(&base, 5);

        let response = client
            .generate(&GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap();
        assert_eq!(response.first_text(), Some("Chill the dough first."));
    }
}
