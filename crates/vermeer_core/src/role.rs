//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
///
/// Serialized in lowercase, matching the hosted model's `role` field.
///
/// # Examples
///
/// ```
/// use vermeer_core::Role;
///
/// assert_eq!(Role::Model.to_string(), "model");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Messages typed by the human
    #[display("user")]
    User,
    /// Replies produced by the hosted model
    #[display("model")]
    Model,
    /// Local notices (never sent as history)
    #[display("system")]
    System,
}
