//! Gemini completer struct, request building, and response parsing.

use tracing::debug;

use crate::{AiError, Completion, Role, TokenUsage, Turn};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Sent in place of an empty turn. The API rejects parts with empty text.
pub(crate) const EMPTY_TURN_TEXT: &str = " ";

/// Gemini completer.
pub struct GeminiCompleter {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiCompleter {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        if config.api_key.trim().is_empty() {
            return Err(AiError::NotConfigured("Gemini API key is empty".into()));
        }
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, transcript: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = transcript
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                let text = if turn.content.is_empty() {
                    EMPTY_TURN_TEXT
                } else {
                    turn.content.as_str()
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": text }]
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(ref system) = self.config.system_prompt {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    ///
    /// A response without candidates, content, or text parts is an absent
    /// completion rather than an error.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Completion {
        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        let Some(first) = json["candidates"].as_array().and_then(|c| c.first()) else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                debug!(reason, "Gemini blocked the prompt");
            }
            return Completion::absent().with_usage(usage);
        };

        let texts: Vec<&str> = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if texts.is_empty() {
            if let Some(reason) = first["finishReason"].as_str() {
                debug!(reason, "Gemini candidate had no text");
            }
            return Completion::absent().with_usage(usage);
        }

        Completion::present(texts.concat()).with_usage(usage)
    }
}
