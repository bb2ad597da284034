//! Trait definitions for the hosted model and the router's content handlers.

use crate::{
    GenerateContentRequest, GenerateContentResponse, GenerateImagesRequest,
    GenerateImagesResponse,
};
use async_trait::async_trait;
use vermeer_core::{EngagementMetrics, PostBrief, ScheduledPost};
use vermeer_error::VermeerResult;

/// A hosted generative-AI service.
///
/// Components receive an implementation explicitly; nothing in the studio
/// reaches for a process-wide client. Test doubles implement this trait
/// directly.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Text, function-calling and structured-output generation.
    async fn generate_content(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> VermeerResult<GenerateContentResponse>;

    /// Image generation.
    async fn generate_images(
        &self,
        model: &str,
        req: &GenerateImagesRequest,
    ) -> VermeerResult<GenerateImagesResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Handlers behind the command router's three functions.
///
/// The router only decides *which* handler runs; an implementation decides
/// what the answer is. Swap in a real metrics store or scheduler here without
/// touching the router.
///
/// # Tracing
///
/// Implementations should instrument each method with `#[instrument]` and
/// record their arguments as span fields.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Draft post briefs on a topic in a tone.
    async fn generate_post_briefs(&self, topic: &str, tone: &str) -> VermeerResult<Vec<PostBrief>>;

    /// Summarize engagement over a period label.
    async fn summarize_metrics(&self, period: &str) -> VermeerResult<EngagementMetrics>;

    /// Schedule a post on a platform at a date and time.
    async fn schedule_post(&self, datetime: &str, platform: &str) -> VermeerResult<ScheduledPost>;
}
