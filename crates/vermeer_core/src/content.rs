//! Shapes returned by the command router's content handlers.

use serde::{Deserialize, Serialize};

/// A short social post drafted around a topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostBrief {
    /// Topic the post was drafted for
    pub topic: String,
    /// Post body
    pub content: String,
    /// Hashtags, each including the leading `#`
    pub hashtags: Vec<String>,
}

/// One bar of an engagement chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDatum {
    /// Metric label (Likes, Comments, Shares, Views)
    pub name: String,
    /// Metric value
    pub value: u64,
    /// Display color as a CSS hex string
    pub color: String,
}

/// Engagement summary for a reporting period.
///
/// # Examples
///
/// ```
/// use vermeer_core::{EngagementMetrics, MetricDatum};
///
/// let metrics = EngagementMetrics {
///     period: "last7days".to_string(),
///     summary: "Steady week".to_string(),
///     data: vec![MetricDatum {
///         name: "Likes".to_string(),
///         value: 1200,
///         color: "#8884d8".to_string(),
///     }],
/// };
///
/// assert_eq!(metrics.value_of("Likes"), Some(1200));
/// assert_eq!(metrics.value_of("Saves"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Period label as given by the caller (e.g. "last7days")
    pub period: String,
    /// One-sentence summary
    pub summary: String,
    /// Ordered metric values
    pub data: Vec<MetricDatum>,
}

impl EngagementMetrics {
    /// Value of the named metric, if present.
    pub fn value_of(&self, name: &str) -> Option<u64> {
        self.data.iter().find(|d| d.name == name).map(|d| d.value)
    }
}

/// Confirmation that a post was (nominally) scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// Date and time as given by the caller
    pub datetime: String,
    /// Target platform
    pub platform: String,
    /// Human-readable confirmation sentence
    pub confirmation: String,
}
