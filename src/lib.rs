//! BizCN Translator - English to Chinese business translation service
//!
//! One translation pipeline: validate a block of English business text, ask
//! an OpenAI chat model for segment-by-segment Simplified Chinese
//! translations with tone-marked pinyin and business-context notes, and
//! relay the resulting JSON array. An axum HTTP API and a one-shot CLI sit
//! on top of the same client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::TranslatorConfig,
    errors::TranslationError,
    models::{TranslationRequest, TranslationSegment},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
