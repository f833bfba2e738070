use serde::{Deserialize, Serialize};

/// Chat session behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Sent to the user when a chat starts. Empty disables it.
    pub greeting: String,
    /// Log a warning once the transcript sent per message exceeds this many bytes.
    pub history_warn_bytes: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: String::new(),
            history_warn_bytes: 256 * 1024,
        }
    }
}
