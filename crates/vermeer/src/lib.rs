//! Vermeer - a Gemini-powered content studio for social media teams.
//!
//! Four components share one explicitly constructed model client:
//!
//! - **Chat relay**: free-form strategy conversation
//! - **Command router**: natural-language commands mapped onto post briefs,
//!   engagement metrics or scheduling via function calling
//! - **Visual concept generator**: structured creative directions for a brief
//! - **Image renderer**: a prompt rendered to a JPEG data URI
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use vermeer::{GeminiClient, ReferenceContentBackend, Studio, VermeerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VermeerConfig::load()?;
//!     let client = Arc::new(GeminiClient::from_config(&config)?);
//!     let studio = Studio::new(client, Arc::new(ReferenceContentBackend::new()), &config.models);
//!
//!     let response = studio.router().route("Show me metrics for last7days").await;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `vermeer_error` - error types
//! - `vermeer_core` - data shapes (messages, concepts, command results)
//! - `vermeer_interface` - `GenerativeModel` and `ContentBackend` traits, wire types
//! - `vermeer_config` - layered TOML configuration
//! - `vermeer_models` - Gemini REST client
//! - `vermeer_studio` - the four components
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use vermeer_config::{GeminiSettings, ModelSettings, VermeerConfig};
pub use vermeer_core::*;
pub use vermeer_error::*;
pub use vermeer_interface::*;
pub use vermeer_models::GeminiClient;
pub use vermeer_studio::*;
