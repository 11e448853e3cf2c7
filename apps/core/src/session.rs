//! Chat session state.
//!
//! Owns the append-only transcript the chat view renders. Messages are
//! never edited or removed; the list grows until the session ends and is
//! not persisted anywhere.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::responder::{ChatResponder, WELCOME_MESSAGE};
use crate::error::AppError;
use crate::models::ChatMessage;

/// Simulated "assistant is typing" pause, uniform in 1000-2000 ms.
///
/// Purely cosmetic pacing for callers that want the chat feel; nothing in
/// the engine depends on it.
pub fn thinking_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(1_000..2_000))
}

/// One conversation with the scripted assistant.
pub struct ChatSession {
    id: String,
    responder: ChatResponder,
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Opens a session, seeded with the assistant's welcome message.
    pub fn new() -> Self {
        let id = Uuid::new_v4().to_string();
        info!("chat session {} opened", id);

        Self {
            id,
            responder: ChatResponder::new(),
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
        }
    }

    /// The unique identifier for the session (UUID).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read-only view of the transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Submits a user message and returns the assistant's reply.
    ///
    /// Appends the user message and the reply to the transcript. Empty or
    /// whitespace-only input is rejected before anything is appended.
    pub fn post(&mut self, text: &str) -> Result<ChatMessage, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "message text must not be empty".to_string(),
            ));
        }

        self.messages.push(ChatMessage::user(text));

        let topic = self.responder.classify(text);
        debug!("session {}: message routed to topic '{}'", self.id, topic);

        let reply = ChatMessage::assistant(topic.response());
        self.messages.push(reply.clone());

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::responder::Topic;

    #[test]
    fn test_session_starts_with_welcome() {
        let session = ChatSession::new();

        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].is_user);
        assert_eq!(messages[0].text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_post_appends_user_and_reply() {
        let mut session = ChatSession::new();

        let reply = session.post("What about my clavicle?").unwrap();
        assert_eq!(reply.text, Topic::Clavicle.response());

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].is_user);
        assert_eq!(messages[1].text, "What about my clavicle?");
        assert!(!messages[2].is_user);
        assert_eq!(messages[2].id, reply.id);
    }

    #[test]
    fn test_post_rejects_empty_input() {
        let mut session = ChatSession::new();

        for text in ["", "   ", "\n\t"] {
            let result = session.post(text);
            assert!(matches!(result, Err(AppError::Validation(_))));
        }

        // Nothing was appended.
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_transcript_only_grows() {
        let mut session = ChatSession::new();

        let questions = vec![
            "hello",
            "what are the symptoms?",
            "how about treatment?",
            "thank you",
        ];
        for (i, question) in questions.iter().enumerate() {
            session.post(question).unwrap();
            assert_eq!(session.messages().len(), 1 + 2 * (i + 1));
        }
    }

    #[test]
    fn test_message_ids_are_unique_across_transcript() {
        let mut session = ChatSession::new();
        session.post("hello").unwrap();
        session.post("thigh pain").unwrap();

        let mut ids: Vec<&str> = session.messages().iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), session.messages().len());
    }

    #[test]
    fn test_thinking_delay_bounds() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let delay = thinking_delay(&mut rng);
            assert!(delay >= Duration::from_millis(1_000));
            assert!(delay < Duration::from_millis(2_000));
        }
    }
}
