//! Pure projection of a conversation for display.

use std::fmt;

use relaychat_common::Role;

use crate::conversation::Conversation;

/// Shown after the transcript while a round trip is outstanding.
pub const LOADING_INDICATOR: &str = "assistant> ...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Assistant,
    System,
}

impl From<Role> for Speaker {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Speaker::You,
            Role::Assistant => Speaker::Assistant,
            Role::System => Speaker::System,
        }
    }
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "you",
            Speaker::Assistant => "assistant",
            Speaker::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub speaker: Speaker,
    pub text: String,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}> {}", self.speaker.label(), self.text)
    }
}

/// What a front end shows: one row per message, plus a loading flag that is
/// never a message of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<Row>,
    pub loading: bool,
}

impl View {
    pub fn project(conversation: &Conversation) -> Self {
        let rows = conversation
            .messages()
            .iter()
            .map(|m| Row {
                speaker: m.role.into(),
                text: m.content.clone(),
            })
            .collect();
        Self {
            rows,
            loading: conversation.is_pending(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        if self.loading {
            writeln!(f, "{LOADING_INDICATOR}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;

    #[test]
    fn empty_conversation_renders_nothing() {
        let view = View::project(&Conversation::new());
        assert!(view.rows.is_empty());
        assert!(!view.loading);
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn pending_shows_indicator_but_no_extra_row() {
        let mut conversation = Conversation::new();
        conversation.begin_submit("hi").unwrap();

        let view = View::project(&conversation);

        assert_eq!(view.rows.len(), 1);
        assert!(view.loading);
        assert_eq!(view.to_string(), "you> hi\nassistant> ...\n");
    }

    #[test]
    fn settled_turn_renders_both_rows() {
        let mut conversation = Conversation::new();
        conversation.begin_submit("hi").unwrap();
        conversation.complete(Err(TransportError::Network("offline".into())));

        let view = View::project(&conversation);

        assert!(!view.loading);
        assert_eq!(
            view.to_string(),
            "you> hi\nassistant> Error: offline. Please try again.\n"
        );
    }

    #[test]
    fn projection_is_pure() {
        let mut conversation = Conversation::new();
        conversation.begin_submit("hi").unwrap();
        conversation.set_input("draft");

        assert_eq!(View::project(&conversation), View::project(&conversation));
    }
}
