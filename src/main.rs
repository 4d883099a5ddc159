//! Mindcoach API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Environment variables:
//! - `MINDCOACH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MINDCOACH_PORT`: Port to listen on (default: 8082)
//! - `OPENAI_API_KEY`: OpenAI API key (optional, enables chat replies)
//! - `MINDCOACH_OPENAI_URL`: OpenAI API base URL (default: https://api.openai.com/v1)
//! - `MINDCOACH_OPENAI_MODEL`: Chat completions model (default: gpt-5)
//! - `RUST_LOG`: Log level (default: info)

use clap::Parser;
use mindcoach::api::{serve, ApiConfig, AppState};
use mindcoach::config::{self, Config};
use mindcoach::openai::{OpenAiClient, OpenAiConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mindcoach")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mental coach chat API server")]
struct Cli {
    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default config file to stdout and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", config::generate_default_config());
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindcoach=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mindcoach API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);

    // Create app state (with or without an OpenAI key)
    let state = match config.openai.api_key.clone() {
        Some(api_key) => {
            tracing::info!(
                "OpenAI integration enabled (model: {})",
                config.openai.model
            );

            let openai = OpenAiClient::new(OpenAiConfig {
                api_key,
                base_url: config.openai.base_url.clone(),
                model: config.openai.model.clone(),
                request_timeout_ms: config.openai.request_timeout_ms,
                ..Default::default()
            });

            AppState::with_openai(api_config.clone(), Arc::new(openai))
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set - chat replies disabled");
            AppState::new(api_config.clone())
        }
    };

    // Run server
    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Mindcoach API server stopped");

    Ok(())
}
