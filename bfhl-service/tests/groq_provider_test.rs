//! Groq provider tests against a mock upstream.

use bfhl_service::config::GroqSettings;
use bfhl_service::services::providers::groq::GroqProvider;
use bfhl_service::services::providers::{CompletionProvider, ProviderError};
use bfhl_service::services::{AiDelegate, AI_ERROR_SENTINEL};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> GroqProvider {
    let mut settings = GroqSettings::new("gsk-test");
    settings.api_base = format!("{}/openai/v1", server.uri());
    GroqProvider::new(settings).expect("Failed to build provider")
}

#[tokio::test]
async fn sends_single_user_message_and_trims_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer gsk-test"))
        .and(body_json(json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [{"role": "user", "content": "What is 2+2?"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  Four.\n"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = provider_for(&server).complete("What is 2+2?").await.unwrap();
    assert_eq!(reply, "Four.");
}

#[tokio::test]
async fn rate_limit_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = provider_for(&server).complete("hi").await.unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = provider_for(&server).complete("hi").await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn delegate_turns_upstream_errors_into_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let delegate = AiDelegate::new(Arc::new(provider_for(&server)));
    assert_eq!(delegate.ask("hi").await, AI_ERROR_SENTINEL);
}

#[tokio::test]
async fn delegate_turns_malformed_body_into_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let delegate = AiDelegate::new(Arc::new(provider_for(&server)));
    assert_eq!(delegate.ask("hi").await, AI_ERROR_SENTINEL);
}
