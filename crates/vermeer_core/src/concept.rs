//! Visual concepts and the caller-side cards built around them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aspect ratios accepted by the image model.
///
/// The wire form is the literal ratio string.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use vermeer_core::AspectRatio;
///
/// assert_eq!(AspectRatio::from_str("16:9").unwrap(), AspectRatio::Landscape);
/// assert_eq!(AspectRatio::Portrait.as_ref(), "9:16");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    PortraitStandard,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    LandscapeStandard,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
    /// 16:9
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
}

impl AspectRatio {
    /// All ratios as wire strings, in declaration order.
    pub fn wire_values() -> Vec<String> {
        use strum::IntoEnumIterator;
        Self::iter().map(|r| r.as_ref().to_string()).collect()
    }
}

/// A proposed visual creative direction, as returned by the concept model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConcept {
    /// Short title
    pub title: String,
    /// What the image shows
    pub description: String,
    /// Color palette entries (hex codes or names)
    pub palette: Vec<String>,
    /// Suggested post caption
    pub caption: String,
    /// Accessibility alt text
    pub alt_text: String,
    /// Suggested aspect ratio
    pub aspect_ratio: AspectRatio,
}

/// A concept plus the presentation fields a caller tracks while rendering.
///
/// The concept generator never produces these; callers wrap its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ConceptCard {
    /// Caller-assigned identifier
    id: Uuid,
    /// The generated concept
    #[serde(flatten)]
    concept: ImageConcept,
    /// Rendered image (usually a data URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    /// Whether a render is in flight
    #[serde(default)]
    is_generating: bool,
}

impl ConceptCard {
    /// Wrap a concept with a fresh v4 id.
    pub fn new(concept: ImageConcept) -> Self {
        Self {
            id: Uuid::new_v4(),
            concept,
            image_url: None,
            is_generating: false,
        }
    }

    /// Mark a render as started.
    pub fn start_rendering(&mut self) {
        self.is_generating = true;
    }

    /// Record a finished render, or `None` if it failed.
    pub fn finish_rendering(&mut self, image_url: Option<String>) {
        self.is_generating = false;
        self.image_url = image_url;
    }
}
