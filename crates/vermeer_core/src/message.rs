//! Chat messages and the history turns derived from them.

use crate::Role;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// One message in a caller's chat transcript.
///
/// # Examples
///
/// ```
/// use vermeer_core::{ChatMessageBuilder, Role};
///
/// let message = ChatMessageBuilder::default()
///     .role(Role::User)
///     .text("Draft a launch post")
///     .module(Some("chat".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(message.role, Role::User);
/// assert!(message.to_turn().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub text: String,
    /// Studio module the message belongs to (e.g. "chat", "intelligence")
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// When the message was created
    #[builder(default = "Utc::now()")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// A user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self::now(Role::User, text)
    }

    /// A model message stamped now.
    pub fn model(text: impl Into<String>) -> Self {
        Self::now(Role::Model, text)
    }

    fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            module: None,
            timestamp: Utc::now(),
        }
    }

    /// History turn for this message.
    ///
    /// System messages are local notices and have no turn.
    pub fn to_turn(&self) -> Option<ChatTurn> {
        match self.role {
            Role::System => None,
            role => Some(ChatTurn {
                role,
                parts: vec![self.text.clone()],
            }),
        }
    }
}

/// A prior conversation turn as sent to the chat relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// `User` or `Model`
    pub role: Role,
    /// Ordered text parts
    pub parts: Vec<String>,
}

impl ChatTurn {
    /// Single-part turn.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![text.into()],
        }
    }
}
