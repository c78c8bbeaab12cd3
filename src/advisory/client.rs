//! Async text-generation client
//!
//! `TextBackend` is the seam between the advisory and the network so tests can
//! substitute a canned backend. `GeminiClient` talks to the Generative
//! Language REST API (`models/<model>:generateContent`).

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::config::AdvisoryConfig;
use crate::error::{Result, RotundaError};

/// One generation request
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub prompt: String,
    /// Reasoning token budget; `Some(0)` disables model thinking
    pub thinking_budget: Option<u32>,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            thinking_budget: None,
        }
    }

    pub fn without_thinking(mut self) -> Self {
        self.thinking_budget = Some(0);
        self
    }
}

pub trait TextBackend {
    /// Generated text. An empty string is a valid (if useless) answer.
    fn generate(&self, request: &TextRequest) -> impl Future<Output = Result<String>>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    /// `None` when no key is configured
    pub fn from_config(config: &AdvisoryConfig) -> Option<Self> {
        let key = config.api_key.clone()?;
        Some(Self::new(key, config.api_url.clone(), config.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl TextBackend for GeminiClient {
    async fn generate(&self, request: &TextRequest) -> Result<String> {
        let body = GenerateRequest::from(request);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RotundaError::Advisory(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        let completion: GenerateResponse = response.json().await?;
        Ok(completion.text())
    }
}

// === Wire format ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl From<&TextRequest> for GenerateRequest {
    fn from(request: &TextRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: request.thinking_budget.map(|budget| GenerationConfig {
                thinking_config: ThinkingConfig {
                    thinking_budget: budget,
                },
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(
            "test-key".into(),
            "https://api.example.com/v1beta/".into(),
            "test-model".into(),
        );
        assert_eq!(client.model(), "test-model");
        assert_eq!(
            client.endpoint(),
            "https://api.example.com/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        assert!(GeminiClient::from_config(&AdvisoryConfig::default()).is_none());
        assert!(GeminiClient::from_config(&AdvisoryConfig::with_key("k")).is_some());
    }

    #[test]
    fn test_request_body() {
        let body = GenerateRequest::from(&TextRequest::new("hello").without_thinking());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);

        let body = GenerateRequest::from(&TextRequest::new("hello"));
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Step "}, {"text": "off."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), "Step off.");
    }

    #[test]
    fn test_response_without_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(response.text(), "");
    }
}
