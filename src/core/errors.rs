//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
///
/// Display strings on the input/credential/content variants are the exact
/// messages surfaced to API callers. Transport variants carry internal
/// detail and must never be surfaced verbatim.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Provider credential is not configured
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    /// Request body is missing the text field, or it is not a non-empty string
    #[error("Missing or invalid text")]
    InvalidInput,

    /// Provider returned a non-success status
    #[error("OpenAI API error ({status}): {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider-supplied message, or a generic fallback
        message: String,
    },

    /// Provider reply carried no message content
    #[error("No translation content received from OpenAI")]
    EmptyResponse,

    /// Model output was not a JSON array
    #[error("Failed to parse translation response")]
    ParseFailed,

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying transport failure
        message: String,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
