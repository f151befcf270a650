//! Upstream completion capability for relaychat.
//!
//! Provides the [`CompletionClient`] seam the relay forwards through, and a
//! DeepSeek client speaking the OpenAI-compatible chat-completions API.
//! One request in, one non-streamed completion out.

pub mod deepseek;

use async_trait::async_trait;

pub use deepseek::{DeepSeekClient, DeepSeekConfig};
pub use relaychat_common::{Message, Role};

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request a single completion for the ordered `messages`.
    async fn complete(&self, messages: &[Message]) -> Result<Completion, AiError>;
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("No response content received")]
    EmptyResponse,
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Timeout
        } else if e.is_decode() {
            AiError::ParseError(e.to_string())
        } else {
            AiError::NetworkError(e.to_string())
        }
    }
}
