//! Integration tests for OpenAIProvider using wiremock

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitgrade_core::config::LlmConfig;
use gitgrade_llm::domain::{CompletionRequest, LlmError, LlmProvider, StopReason};
use gitgrade_llm::infrastructure::providers::OpenAIProvider;

fn create_test_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-api-key".to_string()),
        model: "test-model".to_string(),
        timeout_seconds: 5,
        ..LlmConfig::default()
    }
}

fn create_test_request() -> CompletionRequest {
    CompletionRequest::new()
        .with_system("Output ONLY valid JSON.")
        .with_user("Review this repository")
        .with_max_tokens(100)
        .with_temperature(0.3)
}

fn chat_completion(content: &str, finish_reason: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": finish_reason
        }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 10, "total_tokens": 30 }
    })
}

/// Test successful completion against a mocked chat-completions endpoint
#[tokio::test]
async fn test_openai_complete_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "max_tokens": 100,
            "stream": false,
            "messages": [
                { "role": "system", "content": "Output ONLY valid JSON." },
                { "role": "user", "content": "Review this repository" }
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_completion("{\"score\": 90}", "stop")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let response = provider.complete(create_test_request()).await.unwrap();

    assert_eq!(response.id, "chatcmpl-123");
    assert_eq!(response.text(), "{\"score\": 90}");
    assert_eq!(response.stop_reason, StopReason::EndTurn);
    assert_eq!(response.usage.total_tokens, 30);
}

/// Test that JSON mode is sent as response_format
#[tokio::test]
async fn test_openai_json_mode_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "response_format": { "type": "json_object" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("{}", "stop")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let response = provider
        .complete(create_test_request().with_json_mode())
        .await
        .unwrap();

    assert_eq!(response.text(), "{}");
}

/// Test truncated completion is reported through the stop reason
#[tokio::test]
async fn test_openai_length_finish_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_completion("{\"score\": 9", "length")),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let response = provider.complete(create_test_request()).await.unwrap();

    assert!(response.is_truncated());
}

/// Test rate limit handling with retry-after
#[tokio::test]
async fn test_openai_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "12")
                .set_body_string("Rate limit reached for model"),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let err = provider.complete(create_test_request()).await.unwrap_err();

    assert!(matches!(err, LlmError::RateLimited { .. }));
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(12)));
}

/// Test authentication error handling
#[tokio::test]
async fn test_openai_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API Key"))
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let err = provider.complete(create_test_request()).await.unwrap_err();

    assert_eq!(err, LlmError::Authentication("Invalid API Key".to_string()));
}

/// Test server error handling
#[tokio::test]
async fn test_openai_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let err = provider.complete(create_test_request()).await.unwrap_err();

    assert!(matches!(err, LlmError::ServiceUnavailable(_)));
}

/// Test non-JSON success body is an invalid response
#[tokio::test]
async fn test_openai_undecodable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new(&create_test_config(&mock_server.uri()));
    let err = provider.complete(create_test_request()).await.unwrap_err();

    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

/// Test missing API key fails before any request is sent
#[tokio::test]
async fn test_openai_missing_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("{}", "stop")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri());
    config.api_key = None;
    let provider = OpenAIProvider::new(&config);
    let err = provider.complete(create_test_request()).await.unwrap_err();

    assert!(matches!(err, LlmError::Configuration(_)));
}

/// Test unreachable endpoint maps to a network error
#[tokio::test]
async fn test_openai_unreachable() {
    let provider = OpenAIProvider::new(&create_test_config("http://127.0.0.1:9"));
    let err = provider.complete(create_test_request()).await.unwrap_err();

    assert!(matches!(err, LlmError::Network(_) | LlmError::Timeout { .. }));
}
