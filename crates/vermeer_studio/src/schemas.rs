//! Function declarations and response schemas sent to the hosted model.
//!
//! Names, parameter names, types and required lists are part of the contract
//! with the remote function-calling and structured-output features.

use vermeer_core::AspectRatio;
use vermeer_interface::{FunctionDeclaration, Schema, Tool};

/// Drafts post briefs.
pub const GENERATE_POST_BRIEFS: &str = "generatePostBriefs";
/// Summarizes engagement metrics.
pub const SUMMARIZE_METRICS: &str = "summarizeMetrics";
/// Schedules a post.
pub const SCHEDULE_POST: &str = "schedulePost";

/// The three router functions, in declaration order.
pub fn function_declarations() -> Vec<FunctionDeclaration> {
    vec![
        FunctionDeclaration {
            name: GENERATE_POST_BRIEFS.to_string(),
            description: "Generate three short social media post briefs about a topic in a given tone."
                .to_string(),
            parameters: Schema::object(
                [
                    ("topic", Schema::string("The subject the posts should be about.")),
                    (
                        "tone",
                        Schema::string("The voice of the posts, e.g. witty, professional, inspiring."),
                    ),
                ],
                ["topic", "tone"],
            ),
        },
        FunctionDeclaration {
            name: SUMMARIZE_METRICS.to_string(),
            description: "Summarize likes, comments, shares and views for a reporting period."
                .to_string(),
            parameters: Schema::object(
                [(
                    "period",
                    Schema::string("The reporting period, e.g. last7days or last30days."),
                )],
                ["period"],
            ),
        },
        FunctionDeclaration {
            name: SCHEDULE_POST.to_string(),
            description: "Schedule a social media post on a platform at a date and time."
                .to_string(),
            parameters: Schema::object(
                [
                    (
                        "datetime",
                        Schema::string("When to publish, as an ISO 8601 date and time."),
                    ),
                    (
                        "platform",
                        Schema::string("Where to publish, e.g. Instagram, LinkedIn or X."),
                    ),
                ],
                ["datetime", "platform"],
            ),
        },
    ]
}

/// The router's single tool.
pub fn router_tool() -> Tool {
    Tool {
        function_declarations: function_declarations(),
    }
}

/// Structured-output schema for visual concepts.
///
/// `{"concepts": [ {title, description, palette, caption, altText, aspectRatio} ]}`
/// with one to three concepts.
pub fn concept_response_schema() -> Schema {
    let concept = Schema::object(
        [
            ("title", Schema::string("A short, catchy title for the concept.")),
            (
                "description",
                Schema::string("A detailed description of the image, usable as a generation prompt."),
            ),
            (
                "palette",
                Schema::array(Schema::string("A color as a hex code."))
                    .with_description("Three to five colors for the image."),
            ),
            ("caption", Schema::string("A social media caption for the post.")),
            ("altText", Schema::string("Accessibility alt text for the image.")),
            (
                "aspectRatio",
                Schema::string_enum(
                    "The best aspect ratio for the image.",
                    AspectRatio::wire_values(),
                ),
            ),
        ],
        [
            "title",
            "description",
            "palette",
            "caption",
            "altText",
            "aspectRatio",
        ],
    );

    Schema::object(
        [(
            "concepts",
            Schema::array(concept)
                .with_description("One to three visual concepts.")
                .with_item_bounds(1, 3),
        )],
        ["concepts"],
    )
}
