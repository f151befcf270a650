pub mod errors;
pub mod id;
pub mod message;

pub use errors::{ConfigError, RelayChatError};
pub use id::new_request_id;
pub use message::{Message, Role};

/// Route served by the relay and called by the client.
pub const CHATBOT_PATH: &str = "/api/chatbot";

pub type Result<T> = std::result::Result<T, RelayChatError>;
