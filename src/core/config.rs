//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::prompt::DEFAULT_MODEL;

/// Default chat-completions endpoint
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration for the translation client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Provider credential; may be empty, checked per request
    pub api_key: String,
    /// Chat-completions endpoint URL
    pub api_endpoint: String,
    /// Model identifier
    pub model: String,
    /// Outbound request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    ///
    /// A missing OPENAI_API_KEY is not an error here: the credential is
    /// checked per request so the server can start without it.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

        let api_endpoint = std::env::var("OPENAI_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        if api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; translation requests will be rejected");
        }

        Ok(Self {
            api_key,
            api_endpoint,
            model,
            timeout_ms,
        })
    }

    /// Validate configuration
    ///
    /// An empty api_key is accepted; its absence surfaces per request,
    /// not at startup.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.model.is_empty() {
            return Err(anyhow::anyhow!("Model identifier is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Whether a provider credential is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validation_rejects_empty_endpoint() {
        let config = TranslatorConfig {
            api_endpoint: String::new(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = TranslatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_missing_key() {
        let config = TranslatorConfig {
            api_key: String::new(),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_has_api_key() {
        let config = TranslatorConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        };

        assert!(config.has_api_key());
    }
}
