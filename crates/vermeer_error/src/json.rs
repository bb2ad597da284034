//! JSON encoding and decoding failures.

/// A value could not be encoded to or decoded from JSON.
///
/// `message` should say what was being read or written as well as the
/// serde_json error text.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} ({}:{})", message, file, line)]
pub struct JsonError {
    /// What failed and why
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::JsonError;
    ///
    /// let err = JsonError::new("Invalid concept JSON: expected value at line 1 column 1");
    /// assert!(err.to_string().starts_with("JSON Error: Invalid concept JSON"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
