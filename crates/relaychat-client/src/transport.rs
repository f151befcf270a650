//! Relay transport: how the conversation store reaches `POST /api/chatbot`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use relaychat_common::{Message, CHATBOT_PATH};

#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Send the full history and return the assistant's reply text.
    async fn send(&self, messages: &[Message]) -> Result<String, TransportError>;
}

/// Why a round trip failed. `Display` is the bare message text, ready to be
/// embedded in the synthetic error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Relay { status: u16, message: String },

    #[error("{0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct RelayReply {
    message: Option<String>,
}

#[derive(Deserialize)]
struct RelayFailure {
    error: Option<String>,
}

/// HTTP transport to a relaychat relay server.
pub struct HttpRelay {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpRelay {
    /// `relay_url` is the server base URL, e.g. `http://127.0.0.1:3000`.
    pub fn new(relay_url: &str) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| TransportError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            endpoint: format!("{}{}", relay_url.trim_end_matches('/'), CHATBOT_PATH),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn send(&self, messages: &[Message]) -> Result<String, TransportError> {
        debug!(endpoint = %self.endpoint, messages = messages.len(), "Relay request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&RelayRequest { messages })
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<RelayFailure>(&bytes)
                .ok()
                .and_then(|failure| failure.error)
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(TransportError::Relay {
                status: status.as_u16(),
                message,
            });
        }

        let reply: RelayReply =
            serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))?;
        reply
            .message
            .ok_or_else(|| TransportError::Decode("relay reply has no message".into()))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn endpoint_joins_base_url_and_route() {
        let relay = HttpRelay::new("http://localhost:3000/").unwrap();
        assert_eq!(relay.endpoint(), "http://localhost:3000/api/chatbot");
    }

    #[test]
    fn display_is_bare_message() {
        let err = TransportError::Relay {
            status: 500,
            message: "No response content received".into(),
        };
        assert_eq!(err.to_string(), "No response content received");
        assert_eq!(TransportError::Cancelled.to_string(), "request cancelled");
    }

    #[tokio::test]
    async fn posts_history_and_returns_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chatbot").json_body(json!({
                    "messages": [
                        {"role": "user", "content": "hi"},
                        {"role": "assistant", "content": "hey"},
                        {"role": "user", "content": "how are you?"}
                    ]
                }));
                then.status(200).json_body(json!({"message": "Great!"}));
            })
            .await;

        let relay = HttpRelay::new(&server.base_url()).unwrap();
        let reply = relay
            .send(&[
                Message::user("hi"),
                Message::assistant("hey"),
                Message::user("how are you?"),
            ])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "Great!");
    }

    #[tokio::test]
    async fn error_body_becomes_relay_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chatbot");
                then.status(500)
                    .json_body(json!({"error": "No response content received"}));
            })
            .await;

        let err = HttpRelay::new(&server.base_url())
            .unwrap()
            .send(&[Message::user("hi")])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TransportError::Relay {
                status: 500,
                message: "No response content received".into()
            }
        );
    }

    #[tokio::test]
    async fn non_json_error_falls_back_to_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chatbot");
                then.status(502).body("bad gateway");
            })
            .await;

        let err = HttpRelay::new(&server.base_url())
            .unwrap()
            .send(&[Message::user("hi")])
            .await
            .unwrap_err();

        match err {
            TransportError::Relay { status, message } => {
                assert_eq!(status, 502);
                assert!(message.starts_with("HTTP 502"));
            }
            other => panic!("expected Relay error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_without_message_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/chatbot");
                then.status(200).json_body(json!({}));
            })
            .await;

        let err = HttpRelay::new(&server.base_url())
            .unwrap()
            .send(&[Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_relay_is_network_error() {
        let err = HttpRelay::new("http://127.0.0.1:9")
            .unwrap()
            .send(&[Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
