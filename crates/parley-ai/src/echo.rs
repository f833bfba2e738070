//! Completer that repeats the user's last message back.
//!
//! Useful for running a chat without an API key.

use async_trait::async_trait;

use crate::{AiError, Completer, Completion, Role, Turn};

#[derive(Debug, Clone)]
pub struct EchoCompleter {
    prefix: String,
}

impl EchoCompleter {
    pub fn new() -> Self {
        Self {
            prefix: "You said: ".to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl Default for EchoCompleter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Completer for EchoCompleter {
    fn name(&self) -> &str {
        "echo"
    }

    async fn complete(&self, transcript: &[Turn]) -> Result<Completion, AiError> {
        let last_user = transcript.iter().rev().find(|t| t.role == Role::User);
        Ok(match last_user {
            Some(turn) => Completion::present(format!("{}{}", self.prefix, turn.content)),
            None => Completion::absent(),
        })
    }
}
