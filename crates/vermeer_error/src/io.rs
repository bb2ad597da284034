//! Terminal and file I/O errors raised by the binary.

/// I/O failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IoErrorKind {
    /// Reading interactive input failed
    #[display("Failed to read input: {}", _0)]
    ReadInput(String),
    /// Writing to stdout failed
    #[display("Failed to write output: {}", _0)]
    WriteOutput(String),
    /// Writing a file failed
    #[display("Failed to write file {}: {}", path, message)]
    WriteFile {
        /// Destination path
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// I/O error with location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{IoError, IoErrorKind};
///
/// let err = IoError::new(IoErrorKind::WriteFile {
///     path: "out.jpg".to_string(),
///     message: "permission denied".to_string(),
/// });
/// assert!(err.to_string().contains("out.jpg"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} at line {} in {}", kind, line, file)]
pub struct IoError {
    /// The specific error kind
    pub kind: IoErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new I/O error.
    #[track_caller]
    pub fn new(kind: IoErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
