//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, IoError, JsonError, StudioError};

/// Every error condition a Vermeer crate can raise.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ConfigError, VermeerError};
///
/// let err: VermeerError = ConfigError::new("bad base_url").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Hosted model error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Component-level generation failure
    #[from(StudioError)]
    Studio(StudioError),
    /// Terminal or file I/O failure
    #[from(IoError)]
    Io(IoError),
}

/// Vermeer error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }

    /// The studio error inside, if this is one.
    pub fn as_studio(&self) -> Option<&StudioError> {
        match self.kind() {
            VermeerErrorKind::Studio(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vermeer operations.
pub type VermeerResult<T> = std::result::Result<T, VermeerError>;
