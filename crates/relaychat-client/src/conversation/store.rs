//! Conversation struct and its synchronous state transitions.

use relaychat_common::Message;
use tracing::debug;

use crate::transport::TransportError;

use super::types::PendingTurn;

/// Client-held conversation: ordered history, pending flag, input buffer.
#[derive(Debug, Default)]
pub struct Conversation {
    /// Append-only history, oldest first.
    messages: Vec<Message>,
    /// True exactly while one relay round trip is outstanding.
    pending: bool,
    /// Draft text; stays editable while pending.
    input: String,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a turn.
    ///
    /// Appends `{user, text}`, marks the store pending, clears the input
    /// buffer, and returns the history to send. Returns `None` without
    /// touching any state when `text` is blank or a turn is already pending.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingTurn> {
        if text.trim().is_empty() {
            return None;
        }
        if self.pending {
            debug!("Submission dropped: a round trip is already pending");
            return None;
        }

        self.messages.push(Message::user(text));
        self.pending = true;
        self.input.clear();
        Some(PendingTurn::new(self.messages.clone()))
    }

    /// Reconcile the outstanding turn with its outcome.
    ///
    /// Success appends the reply; failure appends a synthetic assistant
    /// message describing the error. Either way pending is cleared. Returns
    /// `false` (and changes nothing) when no turn is pending.
    pub fn complete(&mut self, outcome: Result<String, TransportError>) -> bool {
        if !self.pending {
            debug!("Ignoring relay outcome with no pending turn");
            return false;
        }

        let reply = match outcome {
            Ok(text) => Message::assistant(text),
            Err(e) => {
                debug!(error = %e, "Relay round trip failed");
                Message::assistant(format!("Error: {e}. Please try again."))
            }
        };
        self.messages.push(reply);
        self.pending = false;
        true
    }

    /// Full history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Drop the transcript. Refused while a turn is pending.
    pub fn clear(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.messages.clear();
        true
    }
}
