//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::models::{TranslationRequest, TranslationSegment};

/// Commands for the business translation service
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },

    /// Translate a block of English business text from the command line
    Translate {
        /// Text to translate
        text: String,
    },
}

/// Handle the serve command
pub async fn handle_serve(host: String, port: u16) -> anyhow::Result<()> {
    crate::server::api::run_server(host, port).await
}

/// Handle the one-shot translate command
///
/// Runs the same validation and provider call as the HTTP endpoint and
/// prints the segments to stdout.
pub async fn handle_translate(text: String) -> anyhow::Result<()> {
    let client = TranslationClient::from_env()?;
    let request = TranslationRequest::new(text);

    let segments = client.translate(&request).await?;
    info!("Received {} segments", segments.len());

    for segment in &segments {
        // Segments are relayed as-is by the API; here we pretty-print the
        // ones matching the documented shape and dump the rest raw.
        match serde_json::from_value::<TranslationSegment>(segment.clone()) {
            Ok(seg) => {
                println!("{}", seg.english);
                println!("  chinese: {}", seg.chinese);
                println!("  pinyin:  {}", seg.pinyin);
                println!("  notes:   {}", seg.notes);
                println!();
            }
            Err(_) => {
                println!("{}", serde_json::to_string_pretty(segment)?);
            }
        }
    }

    Ok(())
}
