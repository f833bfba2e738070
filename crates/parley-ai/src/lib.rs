//! Conversation core for Parley.
//!
//! Provides:
//! - `ConversationSession`: the append-only transcript of one chat connection
//! - the `Completer` trait that maps a transcript to reply text
//! - Gemini and echo completers
//! - per-session token accounting

pub mod echo;
pub mod gemini;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use echo::EchoCompleter;
pub use gemini::{GeminiCompleter, GeminiConfig};
pub use session::{ConversationSession, SessionState};
pub use token_tracker::TokenTracker;

/// Maps a transcript to the next assistant reply.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Short provider name used in logs and token accounting.
    fn name(&self) -> &str;

    /// Complete the conversation. `transcript` is the whole history, oldest first.
    async fn complete(&self, transcript: &[Turn]) -> Result<Completion, AiError>;

    /// Complete a single prompt with no prior history.
    async fn complete_prompt(&self, prompt: &str) -> Result<Completion, AiError> {
        self.complete(&[Turn::user(prompt)]).await
    }
}

/// Speaker of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    /// Message text. Decodes to `""` when missing.
    #[serde(default)]
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Result of one completion call.
///
/// `text` is `None` when the provider answered but produced no usable text
/// (blocked prompt, empty candidate list, non-text parts only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub text: Option<String>,
    pub usage: TokenUsage,
}

impl Completion {
    pub fn present(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            usage: TokenUsage::default(),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = usage;
        self
    }

    pub fn is_absent(&self) -> bool {
        self.text.is_none()
    }

    /// The reply text, or `""` when the provider returned none.
    pub fn text_or_empty(self) -> String {
        self.text.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl From<AiError> for parley_common::ParleyError {
    fn from(err: AiError) -> Self {
        parley_common::ParleyError::Completion(err.to_string())
    }
}
