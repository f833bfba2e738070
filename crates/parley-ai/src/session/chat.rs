//! The user → completion → assistant round trip.

use tracing::{debug, warn};

use crate::{AiError, Completer};

use super::manager::ConversationSession;

impl ConversationSession {
    /// Record `user_message`, complete the whole transcript, record the reply.
    ///
    /// Exactly one assistant turn is appended per call. If the completer fails
    /// the assistant turn is empty and the error is returned.
    pub async fn chat(
        &mut self,
        completer: &dyn Completer,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        self.record_user_turn(user_message);

        debug!(
            provider = completer.name(),
            turns = self.len(),
            payload_bytes = self.payload_bytes(),
            "requesting completion"
        );

        let result = completer.complete(self.export_for_completion()).await;
        match result {
            Ok(completion) => {
                if completion.is_absent() {
                    debug!(provider = completer.name(), "completion had no text");
                }
                let turn = self.record_completion(completer.name(), completion);
                Ok(turn.content.clone())
            }
            Err(e) => {
                warn!(provider = completer.name(), error = %e, "completion failed");
                self.record_assistant_turn(String::new());
                Err(e)
            }
        }
    }
}
