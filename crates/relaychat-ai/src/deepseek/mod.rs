//! DeepSeek chat-completions client.
//!
//! Implements [`CompletionClient`](crate::CompletionClient) against the
//! OpenAI-compatible `/chat/completions` endpoint, authenticating with a
//! Bearer API key.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::DeepSeekClient;
pub use config::DeepSeekConfig;
