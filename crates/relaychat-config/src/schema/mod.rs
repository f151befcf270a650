//! Configuration schema types for relaychat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod client;
mod server;
mod system;
mod upstream;

pub use client::*;
pub use server::*;
pub use system::*;
pub use upstream::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration shared by the relay server and the chat client.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RelayChatConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}
