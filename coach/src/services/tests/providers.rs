//! Tests for the provider adapters against a mock HTTP server

use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::sample_request;
use crate::services::providers::{GeminiAdapter, HuggingFaceAdapter, OpenAiAdapter};
use crate::traits::ProviderAdapter;
use shared::{ProviderFailure, ProviderId};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash-latest:generateContent";

fn openai_adapter(server: &MockServer) -> OpenAiAdapter {
    OpenAiAdapter::with_endpoint(
        Some("test-key".to_string()),
        format!("{}/v1/chat/completions", server.uri()),
    )
}

fn gemini_adapter(server: &MockServer) -> GeminiAdapter {
    GeminiAdapter::with_endpoint(
        Some("test-key".to_string()),
        format!("{}{}", server.uri(), GEMINI_PATH),
    )
}

fn huggingface_adapter(server: &MockServer) -> HuggingFaceAdapter {
    HuggingFaceAdapter::with_endpoint(
        Some("test-key".to_string()),
        format!("{}/models/microsoft/DialoGPT-small", server.uri()),
    )
}

#[test]
fn test_unconfigured_adapters_report_it() {
    assert!(!OpenAiAdapter::new(None).is_configured());
    assert!(!GeminiAdapter::new(None).is_configured());
    assert!(!HuggingFaceAdapter::new(None).is_configured());
    assert!(OpenAiAdapter::new(Some("key".into())).is_configured());
}

#[test]
fn test_adapters_name_their_provider() {
    assert_eq!(OpenAiAdapter::new(None).provider(), ProviderId::OpenAI);
    assert_eq!(GeminiAdapter::new(None).provider(), ProviderId::Gemini);
    assert_eq!(HuggingFaceAdapter::new(None).provider(), ProviderId::HuggingFace);
}

#[tokio::test]
async fn test_openai_success_extracts_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({ "model": "gpt-3.5-turbo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "STRENGTHS: clear opener" } }
            ],
            "usage": { "total_tokens": 42 }
        })))
        .mount(&server)
        .await;

    let text = openai_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap();
    assert_eq!(text, "STRENGTHS: clear opener");
}

#[tokio::test]
async fn test_openai_sends_session_details_in_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [ { "message": { "content": "ok" } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    openai_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap();

    let received = &server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("Speaking Mode: Elevator Pitch"));
    assert!(prompt.contains("Session Transcript: \"hi everyone our compiler\""));
}

#[tokio::test]
async fn test_openai_auth_failure_classified_hard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let failure = openai_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap_err();
    assert_eq!(failure, ProviderFailure::AuthError);
}

#[tokio::test]
async fn test_openai_rate_limit_classified_hard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let failure = openai_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap_err();
    assert_eq!(failure, ProviderFailure::RateLimited);
}

#[tokio::test]
async fn test_server_error_classified_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let failure = openai_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap_err();
    assert_eq!(failure, ProviderFailure::Unavailable);
}

#[tokio::test]
async fn test_contentless_body_classified_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&server)
        .await;

    let failure = openai_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap_err();
    assert!(matches!(failure, ProviderFailure::Malformed(_)));
}

#[tokio::test]
async fn test_gemini_success_extracts_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "solid structure overall" } ] } }
            ]
        })))
        .mount(&server)
        .await;

    let text = gemini_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap();
    assert_eq!(text, "solid structure overall");
}

#[tokio::test]
async fn test_gemini_missing_candidates_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let failure = gemini_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap_err();
    assert!(matches!(failure, ProviderFailure::Malformed(_)));
}

#[tokio::test]
async fn test_huggingface_success_extracts_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/microsoft/DialoGPT-small"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "generated_text": "try slowing down at transitions" }
        ])))
        .mount(&server)
        .await;

    let text = huggingface_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap();
    assert_eq!(text, "try slowing down at transitions");
}

#[tokio::test]
async fn test_huggingface_object_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "loading" })))
        .mount(&server)
        .await;

    let failure = huggingface_adapter(&server)
        .request_feedback(&sample_request())
        .await
        .unwrap_err();
    assert!(matches!(failure, ProviderFailure::Malformed(_)));
}
