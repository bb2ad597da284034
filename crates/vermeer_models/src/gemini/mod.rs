//! Google Gemini REST API client.
//!
//! Covers the two endpoints the studio uses:
//! - `models/{model}:generateContent` - chat, function calling, structured output
//! - `models/{model}:predict` - Imagen image generation

mod client;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, vermeer_error::GeminiError>;
