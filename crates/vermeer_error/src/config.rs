//! Configuration error types.

/// Configuration loading or lookup failure.
///
/// Carries the offending source (a file path or environment variable name)
/// when one is known.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} ({}) at line {} in {}", message, source_hint(origin), line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// File path or variable the error came from
    pub origin: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

fn source_hint(origin: &Option<String>) -> &str {
    origin.as_deref().unwrap_or("unknown source")
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing [models] table");
    /// assert!(err.to_string().contains("Missing [models]"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            origin: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the file path or variable name that caused the error.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}
