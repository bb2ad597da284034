//! Errors surfaced by the content-generation components.
//!
//! The messages are deliberately fixed: callers show them to end users, and
//! the underlying cause is logged where the failure happens.

/// Studio component failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StudioErrorKind {
    /// Visual concept generation failed (remote call or JSON parse)
    #[display("Failed to generate visual concepts. Please try again.")]
    ConceptGeneration,
    /// Image rendering failed (remote call or empty prediction)
    #[display("Failed to generate image. Please try again.")]
    ImageRendering,
    /// A string passed as a data URI could not be decoded
    #[display("Invalid data URI: {}", _0)]
    InvalidDataUri(String),
}

/// Studio error with location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::ImageRendering);
/// assert_eq!(err.kind.to_string(), "Failed to generate image. Please try again.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The specific error kind
    pub kind: StudioErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StudioError {
    /// Create a new studio error.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
