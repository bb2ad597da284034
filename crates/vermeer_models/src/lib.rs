//! Hosted model clients for the Vermeer content studio.
//!
//! # Example
//!
//! ```no_run
//! use vermeer_config::VermeerConfig;
//! use vermeer_interface::{Content, GenerateContentRequest, GenerativeModel};
//! use vermeer_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VermeerConfig::load()?;
//! let client = GeminiClient::from_config(&config)?;
//!
//! let request = GenerateContentRequest::builder()
//!     .contents(vec![Content::user("Hello")])
//!     .build()?;
//! let response = client.generate_content(&config.models.chat, &request).await?;
//! println!("{}", response.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{GeminiClient, GeminiResult};
