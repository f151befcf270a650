//! Upstream completion service settings.

use serde::{Deserialize, Serialize};

/// Environment variable holding the upstream credential.
///
/// The key itself is never read from the config file.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// Upstream chat-completions service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepseek.com".into(),
            model: "deepseek-chat".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
