//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vermeer_core::AspectRatio;

/// Vermeer - social media content studio powered by Gemini
#[derive(Parser, Debug)]
#[command(name = "vermeer")]
#[command(about = "Social media content studio powered by Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the strategy assistant (type /exit to quit)
    Chat,

    /// Run a natural-language command (post briefs, metrics, scheduling)
    Command {
        /// What you want done, e.g. "summarize metrics for last7days"
        prompt: String,
    },

    /// Propose visual concepts for a brief
    Concepts {
        /// Brand name
        #[arg(long)]
        brand: String,

        /// Brand voice
        #[arg(long)]
        tone: String,

        /// What the post is about
        #[arg(long)]
        brief: String,
    },

    /// Render an image from a prompt
    Render {
        /// Image prompt
        #[arg(long)]
        prompt: String,

        /// Aspect ratio (1:1, 3:4, 4:3, 9:16 or 16:9)
        #[arg(long, default_value = "1:1")]
        aspect_ratio: AspectRatio,

        /// Write the JPEG here instead of printing a data URI
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
