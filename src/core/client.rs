//! OpenAI chat-completion client for translation requests

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ChatCompletionRequest, ChatMessage, TranslationRequest};
use crate::core::prompt::{build_translation_prompt, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};

/// Client issuing the single outbound provider call per translation
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl TranslationClient {
    /// Create a new translation client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a block of English business text into segments
    ///
    /// Issues exactly one chat-completion request and returns the model's
    /// JSON array with its elements unmodified. No retry on failure.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Vec<Value>> {
        if !self.config.has_api_key() {
            return Err(TranslationError::MissingApiKey);
        }

        if request.text.is_empty() {
            return Err(TranslationError::InvalidInput);
        }

        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_translation_prompt(&request.text)),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("Requesting translation from {}", self.config.api_endpoint);

        let response = self
            .client
            .post(&self.config.api_endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            // Best-effort: surface the provider's own message when its
            // error body parses, a generic fallback otherwise.
            let error_json: Value = response.json().await.unwrap_or(Value::Null);
            let message = error_json["error"]["message"]
                .as_str()
                .unwrap_or("OpenAI API error")
                .to_string();

            warn!("Provider returned {}: {}", status, message);

            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let json: Value = response.json().await?;

        let content = json["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .filter(|content| !content.is_empty())
            .ok_or(TranslationError::EmptyResponse)?;

        parse_segments(content)
    }
}

/// Strictly parse model output as a JSON array of segments
///
/// All-or-nothing: output that is not valid JSON, or is valid JSON but not
/// an array, is rejected with no repair or partial extraction.
pub fn parse_segments(content: &str) -> Result<Vec<Value>> {
    let value: Value =
        serde_json::from_str(content).map_err(|_| TranslationError::ParseFailed)?;

    match value {
        Value::Array(segments) => Ok(segments),
        _ => Err(TranslationError::ParseFailed),
    }
}
