//! Client side of relaychat.
//!
//! - [`Conversation`]: the ordered message history plus the pending flag,
//!   the single source of truth a front end renders from.
//! - [`RelayTransport`]: the seam to the relay endpoint, with
//!   [`HttpRelay`] as the real implementation.
//! - [`View`]: a pure projection of a conversation for display.

pub mod conversation;
pub mod transport;
pub mod view;

pub use conversation::{Conversation, PendingTurn};
pub use transport::{HttpRelay, RelayTransport, TransportError};
pub use view::{Row, Speaker, View};
