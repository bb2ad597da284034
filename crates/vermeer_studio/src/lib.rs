//! Content-generation components for the Vermeer studio.
//!
//! - [`ChatRelay`] - free-form conversation, never fails
//! - [`CommandRouter`] - function-calling dispatch to a [`ContentBackend`]
//! - [`ConceptGenerator`] - structured visual concepts
//! - [`ImageRenderer`] - single-image rendering to a data URI
//!
//! Each component takes its [`GenerativeModel`] explicitly. [`Studio`]
//! builds all four from one client.
//!
//! [`ContentBackend`]: vermeer_interface::ContentBackend
//! [`GenerativeModel`]: vermeer_interface::GenerativeModel

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod chat;
mod concepts;
pub mod prompts;
mod render;
mod router;
pub mod schemas;
mod studio;

pub use backend::ReferenceContentBackend;
pub use chat::ChatRelay;
pub use concepts::ConceptGenerator;
pub use render::{DATA_URI_PREFIX, ImageRenderer, decode_data_uri};
pub use router::{CommandRouter, MissingArgument, RoutedCall};
pub use studio::Studio;
