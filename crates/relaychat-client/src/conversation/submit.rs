//! One-call async submission for Conversation.

use relaychat_common::Message;

use crate::transport::RelayTransport;

use super::store::Conversation;
use super::types::TurnGuard;

impl Conversation {
    /// Submit `text`, wait for the relay, and reconcile the outcome.
    ///
    /// Returns the appended assistant message (the reply or a synthetic
    /// error), or `None` if the submission was a no-op. Front ends that must
    /// stay responsive during the round trip use
    /// [`begin_submit`](Conversation::begin_submit) and
    /// [`complete`](Conversation::complete) directly.
    pub async fn submit(
        &mut self,
        text: &str,
        transport: &dyn RelayTransport,
    ) -> Option<&Message> {
        let turn = self.begin_submit(text)?;
        let guard = TurnGuard::new(self);
        let outcome = transport.send(turn.messages()).await;
        guard.finish(outcome)
    }
}
