//! Main entry point for the BizCN Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bizcn_translator::cli::commands::{self, Commands};

/// BizCN Translator - English to Chinese business translation API
#[derive(Parser, Debug)]
#[command(name = "bizcn-translator", version, about, long_about = None)]
struct Args {
    /// API key for OpenAI (optional, defaults to OPENAI_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        std::env::set_var("OPENAI_API_KEY", api_key);
    }

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bizcn_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match args.command {
        Some(Commands::Serve { host, port }) => {
            commands::handle_serve(host, port).await?;
        }
        Some(Commands::Translate { text }) => {
            commands::handle_translate(text).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
