//! Decoding tests against response bodies shaped like the live service's.

use vermeer_interface::{
    GenerateContentResponse, GenerateImagesResponse, Part, Schema, SchemaType,
};

#[test]
fn test_function_call_response_decodes() -> anyhow::Result<()> {
    let body = r#"{
      "candidates": [{
        "content": {
          "role": "model",
          "parts": [
            {"functionCall": {"name": "summarizeMetrics", "args": {"period": "last7days"}}},
            {"functionCall": {"name": "schedulePost", "args": {"datetime": "tomorrow", "platform": "X"}}}
          ]
        },
        "finishReason": "STOP"
      }],
      "usageMetadata": {"promptTokenCount": 88, "candidatesTokenCount": 12, "totalTokenCount": 100}
    }"#;

    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let calls = response.function_calls();

    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].name, "summarizeMetrics");
    assert_eq!(calls[0].str_arg("period"), Some("last7days"));
    assert_eq!(calls[0].str_arg("missing"), None);
    assert_eq!(response.text(), None);
    assert_eq!(response.usage_metadata.map(|u| u.total_token_count), Some(100));
    Ok(())
}

#[test]
fn test_thoughts_and_unknown_parts_are_skipped() -> anyhow::Result<()> {
    let body = r#"{
      "candidates": [{
        "content": {
          "role": "model",
          "parts": [
            {"text": "planning...", "thought": true},
            {"executableCode": {"language": "PYTHON", "code": "print(1)"}},
            {"text": "Final answer"}
          ]
        }
      }]
    }"#;

    let response: GenerateContentResponse = serde_json::from_str(body)?;

    assert_eq!(response.text().as_deref(), Some("Final answer"));
    assert!(matches!(
        response.candidates[0].content.as_ref().unwrap().parts[1],
        Part::Other(_)
    ));
    Ok(())
}

#[test]
fn test_blocked_prompt_has_no_candidates() -> anyhow::Result<()> {
    let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;

    let response: GenerateContentResponse = serde_json::from_str(body)?;

    assert!(response.candidates.is_empty());
    assert!(response.function_calls().is_empty());
    assert_eq!(response.text(), None);
    Ok(())
}

#[test]
fn test_filtered_prediction_is_skipped() -> anyhow::Result<()> {
    let body = r#"{
      "predictions": [
        {"raiFilteredReason": "Blocked by safety filter"},
        {"bytesBase64Encoded": "/9j/4AAQ", "mimeType": "image/jpeg"}
      ]
    }"#;

    let response: GenerateImagesResponse = serde_json::from_str(body)?;

    assert_eq!(response.first_image(), Some("/9j/4AAQ"));
    Ok(())
}

#[test]
fn test_enum_schema_serializes_as_enum_key() -> anyhow::Result<()> {
    let schema = Schema::array(Schema::string_enum("Ratio", ["1:1", "16:9"])).with_item_bounds(1, 3);
    let json = serde_json::to_value(&schema)?;

    assert_eq!(json["type"], "ARRAY");
    assert_eq!(json["minItems"], 1);
    assert_eq!(json["maxItems"], 3);
    assert_eq!(json["items"]["enum"][1], "16:9");
    assert_eq!(schema.items.unwrap().schema_type, SchemaType::String);
    Ok(())
}
