//! Reference content handlers for the command router.

use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

use vermeer_core::{EngagementMetrics, MetricDatum, PostBrief, ScheduledPost};
use vermeer_error::VermeerResult;
use vermeer_interface::ContentBackend;

/// A metric the reference backend reports.
#[derive(Debug, Clone, Copy)]
struct MetricRange {
    name: &'static str,
    min: u64,
    max: u64,
    color: &'static str,
}

/// Reported metrics with their inclusive value ranges, in chart order.
const METRICS: [MetricRange; 4] = [
    MetricRange {
        name: "Likes",
        min: 500,
        max: 5000,
        color: "#8884d8",
    },
    MetricRange {
        name: "Comments",
        min: 50,
        max: 800,
        color: "#82ca9d",
    },
    MetricRange {
        name: "Shares",
        min: 20,
        max: 400,
        color: "#ffc658",
    },
    MetricRange {
        name: "Views",
        min: 5000,
        max: 50000,
        color: "#ff8042",
    },
];

/// Post angles: opening template and the hashtag that goes with it.
const BRIEF_ANGLES: [(&str, &str); 3] = [
    (
        "Quick tip: here is a {tone} take on {topic} your audience can use today.",
        "#Tips",
    ),
    (
        "Behind the scenes: a {tone} look at how we approach {topic}.",
        "#BehindTheScenes",
    ),
    (
        "Let's talk about {topic}! Share your {tone} thoughts in the comments.",
        "#Community",
    ),
];

/// Placeholder handlers producing plausible data.
///
/// Briefs and confirmations are templated; metrics are random draws within
/// fixed ranges. Construct with [`with_seed`](Self::with_seed) for
/// reproducible metrics.
///
/// # Examples
///
/// ```
/// use vermeer_interface::ContentBackend;
/// use vermeer_studio::ReferenceContentBackend;
///
/// # #[tokio::main]
/// # async fn main() {
/// let backend = ReferenceContentBackend::with_seed(7);
/// let post = backend.schedule_post("2025-06-01T09:00", "Instagram").await.unwrap();
/// assert_eq!(
///     post.confirmation,
///     "Your post has been scheduled for Instagram on 2025-06-01T09:00."
/// );
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceContentBackend {
    seed: Option<u64>,
}

impl ReferenceContentBackend {
    /// Backend drawing metrics from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose metric draws repeat for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// `"Social Media"` -> `"#SocialMedia"`.
fn hashtag(words: &str) -> String {
    let tag: String = words.split_whitespace().collect();
    format!("#{}", tag)
}

#[async_trait]
impl ContentBackend for ReferenceContentBackend {
    #[instrument(skip(self))]
    async fn generate_post_briefs(&self, topic: &str, tone: &str) -> VermeerResult<Vec<PostBrief>> {
        let briefs = BRIEF_ANGLES
            .iter()
            .map(|(template, angle)| PostBrief {
                topic: topic.to_string(),
                content: template.replace("{tone}", tone).replace("{topic}", topic),
                hashtags: vec![hashtag(topic), hashtag(tone), angle.to_string()],
            })
            .collect::<Vec<_>>();

        debug!(count = briefs.len(), "Drafted post briefs");
        Ok(briefs)
    }

    #[instrument(skip(self))]
    async fn summarize_metrics(&self, period: &str) -> VermeerResult<EngagementMetrics> {
        let mut rng = self.rng();
        let data: Vec<MetricDatum> = METRICS
            .iter()
            .map(|metric| MetricDatum {
                name: metric.name.to_string(),
                value: rng.gen_range(metric.min..=metric.max),
                color: metric.color.to_string(),
            })
            .collect();

        let total: u64 = data.iter().map(|d| d.value).sum();
        debug!(total, "Drew engagement metrics");

        Ok(EngagementMetrics {
            period: period.to_string(),
            summary: format!(
                "Engagement for {} totals {} interactions across likes, comments, shares and views.",
                period, total
            ),
            data,
        })
    }

    #[instrument(skip(self))]
    async fn schedule_post(&self, datetime: &str, platform: &str) -> VermeerResult<ScheduledPost> {
        Ok(ScheduledPost {
            datetime: datetime.to_string(),
            platform: platform.to_string(),
            confirmation: format!(
                "Your post has been scheduled for {} on {}.",
                platform, datetime
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtag_strips_whitespace() {
        assert_eq!(hashtag("Social  Media Tips"), "#SocialMediaTips");
        assert_eq!(hashtag("AI"), "#AI");
    }

    #[tokio::test]
    async fn test_seeded_metrics_repeat() {
        let backend = ReferenceContentBackend::with_seed(42);

        let first = backend.summarize_metrics("last7days").await.unwrap();
        let second = backend.summarize_metrics("last7days").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_metrics_stay_in_range() {
        let backend = ReferenceContentBackend::new();

        for _ in 0..50 {
            let metrics = backend.summarize_metrics("last30days").await.unwrap();
            for (datum, metric) in metrics.data.iter().zip(METRICS.iter()) {
                assert_eq!(datum.name, metric.name);
                assert_eq!(datum.color, metric.color);
                assert!((metric.min..=metric.max).contains(&datum.value));
            }
        }
    }
}
