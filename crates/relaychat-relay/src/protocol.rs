//! Wire shapes of `POST /api/chatbot`.

use serde::{Deserialize, Serialize};

use relaychat_common::{Message, Role};

/// Request body. `messages` must be present and must be an array.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ClientMessage>,
}

/// A caller-supplied turn. Callers may not send `system` messages; the relay
/// owns the single system directive.
#[derive(Debug, Deserialize)]
pub struct ClientMessage {
    pub role: ClientRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientRole {
    User,
    Assistant,
}

impl From<ClientMessage> for Message {
    fn from(msg: ClientMessage) -> Self {
        let role = match msg.role {
            ClientRole::User => Role::User,
            ClientRole::Assistant => Role::Assistant,
        };
        Message::new(role, msg.content)
    }
}

impl ChatRequest {
    /// Parse a raw body into the caller's ordered history.
    pub fn parse(body: &[u8]) -> Result<Vec<Message>, serde_json::Error> {
        let request: ChatRequest = serde_json::from_slice(body)?;
        Ok(request.messages.into_iter().map(Message::from).collect())
    }
}

/// Successful reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Normalized failure body for every error class.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
