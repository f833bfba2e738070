//! Completion provider settings.

use serde::{Deserialize, Serialize};

/// Which completion backend answers chat messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    /// Replies with the user's own text. Needs no API key.
    Echo,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Echo => "echo",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "echo" => Ok(ProviderKind::Echo),
            other => Err(format!("unknown completion provider '{other}'")),
        }
    }
}

/// Completion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub provider: ProviderKind,
    pub model: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    pub system_prompt: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: "gemini-2.0-flash".into(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 120,
            system_prompt: None,
        }
    }
}
