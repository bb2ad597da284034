//! Core data types for the Vermeer content studio.
//!
//! These are plain data-transfer shapes. Nothing here is persisted and no
//! invariants are enforced beyond what serde imposes on the wire.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod concept;
mod content;
mod message;
mod role;
#[cfg(feature = "otel")]
mod telemetry;

pub use command::CommandResponse;
pub use concept::{AspectRatio, ConceptCard, ImageConcept};
pub use content::{EngagementMetrics, MetricDatum, PostBrief, ScheduledPost};
pub use message::{ChatMessage, ChatMessageBuilder, ChatTurn};
pub use role::Role;
#[cfg(feature = "otel")]
pub use telemetry::{init_telemetry, shutdown_telemetry};
