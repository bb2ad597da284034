//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vermeer binary.

mod chat;
mod commands;
mod logging;
mod studio;

pub use chat::run_chat;
pub use commands::{Cli, Commands};
pub use logging::{LoggingConfig, init_logging, shutdown_logging};
pub use studio::{run_command, run_concepts, run_render};
