//! Provider adapter implementations
//!
//! One adapter per inference provider, each translating the neutral
//! `AnalysisRequest` into that provider's HTTP JSON contract and
//! classifying the response. Endpoints are injectable so the wire
//! contracts can be tested against a local mock server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::Settings;
use crate::core::prompt::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::traits::ProviderAdapter;
use crate::types::AnalysisRequest;
use shared::{ProviderFailure, ProviderId};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";
const HUGGINGFACE_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-small";

/// Build the fixed-priority adapter chain from configured credentials
pub fn adapters_from_settings(settings: &Settings) -> Vec<Box<dyn ProviderAdapter>> {
    vec![
        Box::new(HuggingFaceAdapter::new(settings.huggingface_api_key.clone())),
        Box::new(GeminiAdapter::new(settings.gemini_api_key.clone())),
        Box::new(OpenAiAdapter::new(settings.openai_api_key.clone())),
    ]
}

/// Map an HTTP error status onto the failure taxonomy
fn classify_status(status: StatusCode) -> ProviderFailure {
    match status.as_u16() {
        401 | 403 => ProviderFailure::AuthError,
        429 => ProviderFailure::RateLimited,
        _ => ProviderFailure::Unavailable,
    }
}

/// Network-level errors are soft: the chain moves on
fn network_failure(e: reqwest::Error) -> ProviderFailure {
    debug!("provider network error: {e}");
    ProviderFailure::Unavailable
}

/// OpenAI chat-completions adapter
pub struct OpenAiAdapter {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl OpenAiAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, OPENAI_ENDPOINT)
    }

    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::OpenAI
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request_feedback(&self, request: &AnalysisRequest) -> Result<String, ProviderFailure> {
        let api_key = self.api_key.as_deref().ok_or(ProviderFailure::Unavailable)?;

        let request_body = serde_json::json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {
                    "role": "system",
                    "content": ANALYSIS_SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": build_analysis_prompt(request)
                }
            ],
            "max_tokens": 500,
            "temperature": 0.7
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(network_failure)?;

        if !response.status().is_success() {
            return Err(classify_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderFailure::Malformed(format!("failed to parse response: {e}")))?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| ProviderFailure::Malformed("no content in response".to_string()))?;

        Ok(content.to_string())
    }
}

/// Google Gemini generateContent adapter
pub struct GeminiAdapter {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl GeminiAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, GEMINI_ENDPOINT)
    }

    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request_feedback(&self, request: &AnalysisRequest) -> Result<String, ProviderFailure> {
        let api_key = self.api_key.as_deref().ok_or(ProviderFailure::Unavailable)?;

        // Gemini takes no separate system role; fold it into the prompt
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": format!("{ANALYSIS_SYSTEM_PROMPT}\n\n{}", build_analysis_prompt(request))
                        }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 500
            }
        });

        let url = format!("{}?key={}", self.endpoint, api_key);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(network_failure)?;

        if !response.status().is_success() {
            return Err(classify_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderFailure::Malformed(format!("failed to parse response: {e}")))?;

        let content = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| ProviderFailure::Malformed("no content in response".to_string()))?;

        Ok(content.to_string())
    }
}

/// Hugging Face inference-API adapter
pub struct HuggingFaceAdapter {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl HuggingFaceAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, HUGGINGFACE_ENDPOINT)
    }

    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for HuggingFaceAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::HuggingFace
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request_feedback(&self, request: &AnalysisRequest) -> Result<String, ProviderFailure> {
        let api_key = self.api_key.as_deref().ok_or(ProviderFailure::Unavailable)?;

        let request_body = serde_json::json!({
            "inputs": build_analysis_prompt(request),
            "parameters": {
                "max_new_tokens": 500,
                "temperature": 0.7,
                "do_sample": true,
                "return_full_text": false
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(network_failure)?;

        if !response.status().is_success() {
            return Err(classify_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderFailure::Malformed(format!("failed to parse response: {e}")))?;

        let content = response_json
            .get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| ProviderFailure::Malformed("no generated text in response".to_string()))?;

        Ok(content.to_string())
    }
}
