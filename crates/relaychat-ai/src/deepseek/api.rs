//! CompletionClient trait implementation for DeepSeekClient.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::{AiError, Completion, CompletionClient, Message};

use super::client::{ChatCompletionResponse, DeepSeekClient};

#[async_trait]
impl CompletionClient for DeepSeekClient {
    async fn complete(&self, messages: &[Message]) -> Result<Completion, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, messages = messages.len(), "DeepSeek API request");

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            error!(%status, body = %text, "DeepSeek API error");
            return Err(AiError::ApiError(format!("HTTP {status}")));
        }

        let bytes = response.bytes().await?;
        let parsed: ChatCompletionResponse =
            serde_json::from_slice(&bytes).map_err(|e| AiError::ParseError(e.to_string()))?;

        let completion = self.parse_response(parsed)?;
        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "DeepSeek API response"
        );
        Ok(completion)
    }
}
