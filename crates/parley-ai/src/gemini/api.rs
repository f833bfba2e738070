//! Completer trait implementation for GeminiCompleter.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, Completer, Completion, Turn};

use super::client::GeminiCompleter;

#[async_trait]
impl Completer for GeminiCompleter {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, transcript: &[Turn]) -> Result<Completion, AiError> {
        let body = self.build_request_body(transcript);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = transcript.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        Ok(self.parse_response(&json))
    }
}

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}
