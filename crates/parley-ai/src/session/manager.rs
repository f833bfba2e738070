//! Session struct and transcript bookkeeping.

use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::{Completion, Role, Turn};

use super::types::SessionState;

/// The transcript of one chat connection.
///
/// Turns are only ever appended. Every recording operation is total: any
/// string is valid content and nothing is dropped. The whole transcript is
/// exported on every completion call; nothing here windows or summarizes it.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub(super) transcript: Vec<Turn>,
    pub(super) state: SessionState,
    pub(super) tracker: TokenTracker,
}

impl ConversationSession {
    /// Begin a session with an empty transcript.
    pub fn start() -> Self {
        Self {
            transcript: Vec::new(),
            state: SessionState::Active,
            tracker: TokenTracker::new(),
        }
    }

    pub fn record_user_turn(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into());
    }

    /// Append an assistant turn. Pass `""` when the completion had no text.
    pub fn record_assistant_turn(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    /// Append the assistant turn for `completion` and account for its usage.
    ///
    /// An absent result becomes an empty assistant turn.
    pub fn record_completion(&mut self, provider: &str, completion: Completion) -> &Turn {
        self.tracker
            .record(provider, &completion.usage, completion.is_absent());
        self.record_assistant_turn(completion.text_or_empty());
        // record_assistant_turn just pushed, so the transcript is non-empty
        &self.transcript[self.transcript.len() - 1]
    }

    /// The full history in chronological order, for the completion call.
    pub fn export_for_completion(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.transcript.last()
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Total content bytes sent per completion call. Grows without bound.
    pub fn payload_bytes(&self) -> u64 {
        self.transcript.iter().map(|t| t.content.len() as u64).sum()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Mark the session ended. Called by the hosting layer when the connection closes.
    pub fn end(&mut self) {
        self.state = SessionState::Ended;
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    fn push(&mut self, role: Role, content: String) {
        if self.state == SessionState::Ended {
            debug!(role = ?role, "recording turn on an ended session");
        }
        self.transcript.push(Turn { role, content });
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::start()
    }
}
