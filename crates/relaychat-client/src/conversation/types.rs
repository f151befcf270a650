//! Turn tokens and the guard that reconciles abandoned round trips.

use relaychat_common::Message;

use crate::transport::TransportError;

use super::store::Conversation;

/// Snapshot of the history to send for one outstanding turn.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    messages: Vec<Message>,
}

impl PendingTurn {
    pub(super) fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// The full history, ending with the just-submitted user message.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Guard that reconciles the outstanding turn as cancelled on drop, so the
/// pending flag is always released and the turn still gets its reply slot
/// even if the future is dropped mid-flight.
pub(super) struct TurnGuard<'a> {
    conversation: Option<&'a mut Conversation>,
}

impl<'a> TurnGuard<'a> {
    pub(super) fn new(conversation: &'a mut Conversation) -> Self {
        Self {
            conversation: Some(conversation),
        }
    }

    /// Reconcile with the real outcome and return the appended message.
    pub(super) fn finish(mut self, outcome: Result<String, TransportError>) -> Option<&'a Message> {
        let conversation = self.conversation.take()?;
        conversation.complete(outcome);
        let conversation: &'a Conversation = conversation;
        conversation.messages().last()
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if let Some(conversation) = self.conversation.take() {
            tracing::debug!("Round trip abandoned, reconciling as cancelled");
            conversation.complete(Err(TransportError::Cancelled));
        }
    }
}
