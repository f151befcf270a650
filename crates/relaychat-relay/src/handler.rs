//! `POST /api/chatbot`: validate, prepend the system directive, forward once.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::Instrument;

use relaychat_ai::CompletionClient;
use relaychat_common::{new_request_id, Message, CHATBOT_PATH};

use crate::error::RelayError;
use crate::protocol::{ChatRequest, ChatResponse};

/// Directive placed ahead of every caller-supplied history.
pub const SYSTEM_PROMPT: &str = "You are a friendly AI assistant.";

/// Largest request body the relay buffers; long histories are resent whole.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Shared handler state: the upstream client built once at startup.
#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CHATBOT_PATH, post(chatbot))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn chatbot(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    let span = tracing::info_span!("chatbot", request_id = %new_request_id());

    async move {
        let result = match body {
            Ok(body) => relay(state.client.as_ref(), &body).await,
            Err(rejection) => Err(RelayError::Body(rejection)),
        };
        match &result {
            Ok(_) => {}
            Err(e @ RelayError::Body(_)) => {
                tracing::warn!(status = %e.status(), error = %e, "Rejected request body");
            }
            Err(RelayError::InvalidMessages(e)) => {
                tracing::warn!(error = %e, "Rejected malformed request");
            }
            Err(RelayError::Upstream(e)) => {
                tracing::error!(error = %e, "Upstream completion failed");
            }
        }
        result.map(Json)
    }
    .instrument(span)
    .await
}

/// One relay round: exactly one upstream call, no retries.
async fn relay(client: &dyn CompletionClient, body: &[u8]) -> Result<ChatResponse, RelayError> {
    let history = ChatRequest::parse(body).map_err(RelayError::InvalidMessages)?;

    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::system(SYSTEM_PROMPT));
    messages.extend(history);

    tracing::debug!(messages = messages.len(), "Forwarding conversation upstream");
    let completion = client.complete(&messages).await?;

    tracing::info!(
        input_tokens = completion.usage.input_tokens,
        output_tokens = completion.usage.output_tokens,
        total_tokens = completion.usage.total_tokens(),
        "Completion relayed"
    );
    Ok(ChatResponse {
        message: completion.content,
    })
}
