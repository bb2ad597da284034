mod test_utils;

use serde_json::json;
use std::sync::Arc;
use test_utils::MockModel;
use vermeer_core::CommandResponse;
use vermeer_error::GeminiErrorKind;
use vermeer_interface::{FunctionCall, FunctionCallPart, Part};
use vermeer_studio::prompts::{GENERIC_ERROR_MESSAGE, REPHRASE_MESSAGE};
use vermeer_studio::{CommandRouter, ReferenceContentBackend};

fn call_part(name: &str, args: serde_json::Value) -> Part {
    Part::FunctionCall(FunctionCallPart {
        function_call: FunctionCall {
            name: name.to_string(),
            args,
        },
    })
}

fn router_for(model: &MockModel) -> CommandRouter<MockModel, ReferenceContentBackend> {
    CommandRouter::new(
        Arc::new(model.clone()),
        Arc::new(ReferenceContentBackend::new()),
        "gemini-2.5-flash",
    )
}

#[tokio::test]
async fn test_summarize_metrics_returns_four_bounded_entries() {
    let model = MockModel::parts(vec![call_part(
        "summarizeMetrics",
        json!({"period": "last7days"}),
    )]);

    let response = router_for(&model).route("How did we do last week?").await;

    let CommandResponse::Metrics(metrics) = response else {
        panic!("expected metrics, got {response:?}");
    };
    let names: Vec<&str> = metrics.data.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Likes", "Comments", "Shares", "Views"]);
    assert!((500..=5000).contains(&metrics.value_of("Likes").unwrap()));
    assert!((50..=800).contains(&metrics.value_of("Comments").unwrap()));
    assert!((20..=400).contains(&metrics.value_of("Shares").unwrap()));
    assert!((5000..=50000).contains(&metrics.value_of("Views").unwrap()));
    assert!(metrics.summary.contains("last7days"));
}

#[tokio::test]
async fn test_no_function_call_asks_to_rephrase() {
    let model = MockModel::text("I can only help with social media tasks.");

    let response = router_for(&model).route("What's the weather?").await;

    assert_eq!(response, CommandResponse::error(REPHRASE_MESSAGE));
}

#[tokio::test]
async fn test_unknown_function_is_named_in_error() {
    let model = MockModel::parts(vec![call_part("deletePost", json!({"id": "42"}))]);

    let response = router_for(&model).route("Delete my last post").await;

    let message = response.error_message().expect("expected error response");
    assert!(message.contains("deletePost"));
    assert_eq!(message, "Function deletePost is not implemented.");
}

#[tokio::test]
async fn test_post_briefs_share_topic_and_hashtag() {
    let model = MockModel::parts(vec![call_part(
        "generatePostBriefs",
        json!({"topic": "AI", "tone": "witty"}),
    )]);

    let response = router_for(&model).route("Write some witty posts about AI").await;

    let CommandResponse::PostBriefs(briefs) = response else {
        panic!("expected post briefs, got {response:?}");
    };
    assert_eq!(briefs.len(), 3);
    for brief in &briefs {
        assert_eq!(brief.topic, "AI");
        assert!(brief.hashtags.contains(&"#AI".to_string()));
        assert!(brief.hashtags.contains(&"#witty".to_string()));
    }
}

#[tokio::test]
async fn test_schedule_post_confirms() {
    let model = MockModel::parts(vec![call_part(
        "schedulePost",
        json!({"datetime": "2025-06-01T09:00:00", "platform": "LinkedIn"}),
    )]);

    let response = router_for(&model).route("Post it on LinkedIn June 1st at 9").await;

    let CommandResponse::Scheduled(post) = response else {
        panic!("expected scheduled post, got {response:?}");
    };
    assert_eq!(
        post.confirmation,
        "Your post has been scheduled for LinkedIn on 2025-06-01T09:00:00."
    );
}

#[tokio::test]
async fn test_only_first_call_is_dispatched() {
    let model = MockModel::parts(vec![
        call_part("schedulePost", json!({"datetime": "tomorrow", "platform": "X"})),
        call_part("summarizeMetrics", json!({"period": "last30days"})),
    ]);

    let response = router_for(&model).route("Schedule it and show metrics").await;

    assert!(matches!(response, CommandResponse::Scheduled(_)));
}

#[tokio::test]
async fn test_missing_argument_is_reported() {
    let model = MockModel::parts(vec![call_part("schedulePost", json!({"platform": "X"}))]);

    let response = router_for(&model).route("Schedule a post on X").await;

    let message = response.error_message().expect("expected error response");
    assert!(message.contains("schedulePost"));
    assert!(message.contains("datetime"));
}

#[tokio::test]
async fn test_remote_failure_yields_generic_error() {
    let model = MockModel::failing(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "UNAVAILABLE: overloaded".to_string(),
    });

    let response = router_for(&model).route("Summarize last week").await;

    assert_eq!(response, CommandResponse::error(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_request_declares_three_functions() {
    let model = MockModel::text("ok");

    router_for(&model).route("anything").await;

    let request = model.single_content_request();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["contents"][0]["parts"][0]["text"], "anything");
    assert!(json["systemInstruction"]["parts"][0]["text"].is_string());
    assert_eq!(
        json["tools"][0]["functionDeclarations"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}
