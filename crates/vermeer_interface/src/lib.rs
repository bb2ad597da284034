//! Trait definitions and wire types for the Vermeer content studio.
//!
//! Two seams are defined here:
//! - [`GenerativeModel`] - the hosted generative-AI service every component calls
//! - [`ContentBackend`] - the handlers the command router dispatches to
//!
//! The request and response types mirror the Gemini REST API JSON so that a
//! client implementation only has to move bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod imagen;
mod protocol;
mod schema;
mod traits;

pub use imagen::{
    GenerateImagesRequest, ImageInstance, ImageParameters, ImagePrediction, GenerateImagesResponse,
    OutputOptions, JPEG_MIME_TYPE,
};
pub use protocol::{
    Candidate, Content, FunctionCall, FunctionCallPart, FunctionDeclaration, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig, InlineData,
    InlineDataPart, Part, TextPart, Tool, UsageMetadata,
};
pub use schema::{Schema, SchemaType};
pub use traits::{ContentBackend, GenerativeModel};
