//! End-to-end wiring of the studio through the facade crate.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use vermeer::{
    AspectRatio, CommandResponse, FunctionCall, FunctionCallPart, GenerateContentRequest,
    GenerateContentResponse, GenerateImagesRequest, GenerateImagesResponse, GenerativeModel,
    Part, ReferenceContentBackend, Studio, VermeerConfig, VermeerResult,
};

/// Answers by model name so each component can be checked against its configured model.
struct ByModelName;

#[async_trait]
impl GenerativeModel for ByModelName {
    async fn generate_content(
        &self,
        model: &str,
        _req: &GenerateContentRequest,
    ) -> VermeerResult<GenerateContentResponse> {
        let part = match model {
            "router-model" => Part::FunctionCall(FunctionCallPart {
                function_call: FunctionCall {
                    name: "summarizeMetrics".to_string(),
                    args: json!({"period": "last30days"}),
                },
            }),
            other => Part::text(format!("answered by {other}")),
        };
        Ok(GenerateContentResponse::from_parts(vec![part]))
    }

    async fn generate_images(
        &self,
        model: &str,
        _req: &GenerateImagesRequest,
    ) -> VermeerResult<GenerateImagesResponse> {
        assert_eq!(model, "image-model");
        Ok(GenerateImagesResponse::single_jpeg("AAAA"))
    }

    fn provider_name(&self) -> &'static str {
        "by-model-name"
    }
}

fn studio() -> Studio<ByModelName, ReferenceContentBackend> {
    let mut config = VermeerConfig::default();
    config.models.chat = "chat-model".to_string();
    config.models.router = "router-model".to_string();
    config.models.concepts = "concept-model".to_string();
    config.models.images = "image-model".to_string();

    Studio::new(
        Arc::new(ByModelName),
        Arc::new(ReferenceContentBackend::with_seed(3)),
        &config.models,
    )
}

#[tokio::test]
async fn test_components_use_configured_models() -> anyhow::Result<()> {
    let studio = studio();

    assert_eq!(studio.chat().send(&[], "hi").await, "answered by chat-model");

    let response = studio.router().route("metrics please").await;
    assert!(matches!(response, CommandResponse::Metrics(ref m) if m.period == "last30days"));

    let uri = studio.renderer().render("a kite", AspectRatio::Square).await?;
    assert_eq!(uri, "data:image/jpeg;base64,AAAA");
    Ok(())
}

#[tokio::test]
async fn test_concepts_reject_plain_text() {
    let studio = studio();

    let err = studio
        .concepts()
        .generate("Brand", "calm", "a brief")
        .await
        .unwrap_err();

    assert!(err.as_studio().is_some());
}
