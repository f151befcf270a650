//! Conversation store.
//!
//! Holds the ordered history and the pending flag. A submission appends the
//! user message and marks the store pending; reconciling the round trip
//! appends exactly one assistant message (the reply or a synthetic error)
//! and clears the flag.

mod store;
mod submit;
mod types;

pub use store::Conversation;
pub use types::PendingTurn;
