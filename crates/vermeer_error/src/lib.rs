//! Error types for the Vermeer content studio.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{ConfigError, VermeerResult};
//!
//! fn load_model_name() -> VermeerResult<String> {
//!     Err(ConfigError::new("models.chat is empty"))?
//! }
//!
//! assert!(load_model_name().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod io;
mod json;
mod studio;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use io::{IoError, IoErrorKind};
pub use json::JsonError;
pub use studio::{StudioError, StudioErrorKind};
