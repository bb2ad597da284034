//! Vermeer CLI binary.
//!
//! This binary provides command-line access to the content studio:
//! - Chat with the strategy assistant
//! - Route natural-language commands to content handlers
//! - Generate visual concepts and render images

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use vermeer::{GeminiClient, ReferenceContentBackend, Studio, VermeerConfig, VermeerResult};

mod cli;

use cli::{
    Cli, Commands, LoggingConfig, init_logging, run_chat, run_command, run_concepts, run_render,
    shutdown_logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Secrets may live in a local .env file
    let dotenv = dotenvy::dotenv();

    init_logging(&LoggingConfig::new(cli.verbose).with_json_logs(cli.json_logs))?;
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let result = run(cli).await;
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }

    shutdown_logging();
    Ok(result?)
}

async fn run(cli: Cli) -> VermeerResult<()> {
    let config = match &cli.config {
        Some(path) => VermeerConfig::from_file(path)?,
        None => VermeerConfig::load()?,
    };

    // Fail before any command runs if the key is missing
    let client = Arc::new(GeminiClient::from_config(&config)?);
    let studio = Studio::new(
        client,
        Arc::new(ReferenceContentBackend::new()),
        &config.models,
    );

    match cli.command {
        Commands::Chat => run_chat(studio.chat()).await,
        Commands::Command { prompt } => run_command(&studio, &prompt).await,
        Commands::Concepts { brand, tone, brief } => {
            run_concepts(&studio, &brand, &tone, &brief).await
        }
        Commands::Render {
            prompt,
            aspect_ratio,
            out,
        } => run_render(&studio, &prompt, aspect_ratio, out.as_deref()).await,
    }
}
