//! Tests for the DeepSeek client against a mock chat-completions server.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use super::*;
use crate::{AiError, CompletionClient, Message};

fn client_for(server: &MockServer) -> DeepSeekClient {
    let config = DeepSeekConfig::new("sk-test").with_base_url(server.base_url());
    DeepSeekClient::new(config).unwrap()
}

#[test]
fn debug_output_redacts_api_key() {
    let config = DeepSeekConfig::new("sk-secret-value");
    let debug = format!("{config:?}");
    assert!(!debug.contains("sk-secret-value"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn defaults_target_deepseek_chat() {
    let config = DeepSeekConfig::new("k");
    assert_eq!(config.base_url, "https://api.deepseek.com");
    assert_eq!(config.model, "deepseek-chat");
}

#[test]
fn api_url_tolerates_trailing_slash() {
    let client =
        DeepSeekClient::new(DeepSeekConfig::new("k").with_base_url("http://localhost:9/")).unwrap();
    assert_eq!(client.api_url(), "http://localhost:9/chat/completions");
}

#[test]
fn request_body_is_non_streamed_and_keeps_order() {
    let client = DeepSeekClient::new(DeepSeekConfig::new("k")).unwrap();
    let messages = vec![
        Message::system("be nice"),
        Message::user("hi"),
        Message::assistant("hello"),
    ];
    let body = serde_json::to_value(client.build_request_body(&messages)).unwrap();
    assert_eq!(
        body,
        json!({
            "model": "deepseek-chat",
            "stream": false,
            "messages": [
                {"role": "system", "content": "be nice"},
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "hello"}
            ]
        })
    );
}

#[tokio::test]
async fn complete_returns_first_choice_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body_partial(r#"{"model":"deepseek-chat","stream":false}"#);
            then.status(200).json_body(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Hello!"}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3}
            }));
        })
        .await;

    let completion = client_for(&server)
        .complete(&[Message::user("hi")])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(completion.content, "Hello!");
    assert_eq!(completion.usage.input_tokens, 12);
    assert_eq!(completion.usage.output_tokens, 3);
}

#[tokio::test]
async fn missing_usage_defaults_to_zero() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .json_body(json!({"choices": [{"message": {"content": "ok"}}]}));
        })
        .await;

    let completion = client_for(&server)
        .complete(&[Message::user("hi")])
        .await
        .unwrap();
    assert_eq!(completion.usage.total_tokens(), 0);
}

#[tokio::test]
async fn no_choices_is_empty_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let err = client_for(&server)
        .complete(&[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::EmptyResponse));
}

#[tokio::test]
async fn null_or_empty_content_is_empty_response() {
    for content in [json!(null), json!("")] {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .json_body(json!({"choices": [{"message": {"content": content}}]}));
            })
            .await;

        let err = client_for(&server)
            .complete(&[Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse));
    }
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("slow down");
        })
        .await;

    let err = client_for(&server)
        .complete(&[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn http_error_keeps_upstream_body_out_of_the_message() {
    let server = MockServer::start_async().await;
    let long_body = "x".repeat(1000);
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401).body(format!("secret-detail {long_body}"));
        })
        .await;

    let err = client_for(&server)
        .complete(&[Message::user("hi")])
        .await
        .unwrap_err();
    match err {
        AiError::ApiError(msg) => {
            assert_eq!(msg, "HTTP 401 Unauthorized");
            assert!(!msg.contains("secret-detail"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).body("not json");
        })
        .await;

    let err = client_for(&server)
        .complete(&[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"choices": [{"message": {"content": "late"}}]}));
        })
        .await;

    let config = DeepSeekConfig::new("sk-test")
        .with_base_url(server.base_url())
        .with_request_timeout(Duration::from_millis(200));
    let err = DeepSeekClient::new(config)
        .unwrap()
        .complete(&[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Timeout));
}

#[tokio::test]
async fn unreachable_upstream_is_network_error() {
    // Port 9 (discard) is closed on test machines.
    let config = DeepSeekConfig::new("sk-test").with_base_url("http://127.0.0.1:9");
    let err = DeepSeekClient::new(config)
        .unwrap()
        .complete(&[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::NetworkError(_)));
}
