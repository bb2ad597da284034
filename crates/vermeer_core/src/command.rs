//! The command router's result type.

use crate::{EngagementMetrics, PostBrief, ScheduledPost};
use serde::{Deserialize, Serialize};

/// What a routed command produced.
///
/// Serialized untagged: the error case is the object `{"error": "..."}` and
/// is told apart from the success shapes only by that field.
///
/// # Examples
///
/// ```
/// use vermeer_core::CommandResponse;
///
/// let response = CommandResponse::error("Please rephrase");
/// assert!(response.is_error());
/// assert_eq!(
///     serde_json::to_string(&response).unwrap(),
///     r#"{"error":"Please rephrase"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum CommandResponse {
    /// Engagement summary
    Metrics(EngagementMetrics),
    /// Drafted posts
    PostBriefs(Vec<PostBrief>),
    /// Scheduling confirmation
    Scheduled(ScheduledPost),
    /// Failure description
    #[from(ignore)]
    Error {
        /// Human-readable message
        error: String,
    },
}

impl CommandResponse {
    /// Error-tagged response.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Whether this is the error shape.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(error),
            _ => None,
        }
    }
}
