// the per-turn pipeline: screen the message, then disclaim or complete

use crate::core::ai::Complete;
use crate::core::chat::{Message, Role};
use crate::core::screen::Screen;

/// Injected fresh into every outbound request; never stored in the
/// transcript.
pub const SYSTEM_PROMPT: &str = "\
You are AIdvice, a supportive, non-clinical AI tool designed to offer general advice and helpful perspectives.
You are not a substitute for professional medical, legal, financial, or psychological advice.
Always encourage users to seek qualified professionals for specific, personal concerns.
Your responses should be empathetic, encouraging, and focus on general principles or thought-provoking questions rather than direct solutions for complex personal problems.
Maintain a positive and respectful tone.";

/// Returned unchanged for every screened message.
pub const DISCLAIMER: &str = "\
It sounds like you're dealing with something very significant. \
AIdvice is a general AI tool and cannot offer the specialized, personal guidance \
you might need for concerns of this nature. Please consider reaching out to a \
qualified human professional (like a therapist, doctor, lawyer, or financial advisor) \
who can provide expert, tailored advice and support. Remember, seeking professional \
help is a sign of strength, and you don't have to face this alone.";

/// Decides, per turn, whether a message is answered by the model or
/// intercepted with the disclaimer. Holds no cross-turn state; the caller
/// owns the transcript.
pub struct Router<C: Complete> {
    client: C,
}

impl<C: Complete> Router<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Process one user turn against the prior conversation.
    ///
    /// Screened messages get the disclaimer without any network call.
    /// Otherwise exactly one completion request goes out, carrying the
    /// system prompt, the user/assistant turns of `history` in order, and
    /// `user_message` last. Provider failures come back as a readable
    /// in-chat string; nothing escapes as an error. `history` is never
    /// mutated - appending both the user message and the returned reply is
    /// the caller's job.
    pub async fn respond(&self, user_message: &str, history: &[Message]) -> String {
        if Screen::check(user_message).intercept {
            return DISCLAIMER.to_string();
        }

        let mut messages: Vec<Message> = history
            .iter()
            .filter(|m| matches!(m.role, Role::User | Role::Assistant))
            .cloned()
            .collect();
        messages.push(Message::user(user_message));

        match self.client.complete(SYSTEM_PROMPT, &messages).await {
            Ok(reply) => reply,
            Err(e) => format!(
                "An error occurred while fetching a response from AIdvice: {e}. \
                 Please check your API key and network connection."
            ),
        }
    }
}
