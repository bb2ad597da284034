//! Wire-format tests for `GeminiClient` against a local HTTP stub.

use serde_json::json;
use vermeer_core::AspectRatio;
use vermeer_error::{GeminiErrorKind, VermeerErrorKind};
use vermeer_interface::{Content, GenerateContentRequest, GenerateImagesRequest, GenerativeModel};
use vermeer_models::GeminiClient;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key", &format!("{}/v1beta", server.uri()))
        .expect("client should build")
}

fn hello_request() -> GenerateContentRequest {
    GenerateContentRequest::builder()
        .contents(vec![Content::user("Hello")])
        .system_instruction(Content::instruction("Be kind."))
        .build()
        .expect("request should build")
}

fn gemini_kind(err: &vermeer_error::VermeerError) -> &GeminiErrorKind {
    match err.kind() {
        VermeerErrorKind::Gemini(e) => &e.kind,
        other => panic!("expected Gemini error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_content_posts_expected_body() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hello"}]}],
            "systemInstruction": {"parts": [{"text": "Be kind."}]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi there!"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .generate_content("gemini-2.5-flash", &hello_request())
        .await?;

    assert_eq!(response.text().as_deref(), Some("Hi there!"));
    Ok(())
}

#[tokio::test]
async fn test_error_status_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .generate_content("gemini-2.5-flash", &hello_request())
        .await
        .unwrap_err();

    assert_eq!(
        gemini_kind(&err),
        &GeminiErrorKind::HttpError {
            status_code: 403,
            message: "PERMISSION_DENIED: API key not valid".to_string(),
        }
    );
}

#[tokio::test]
async fn test_undecodable_body_maps_to_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .generate_content("gemini-2.5-flash", &hello_request())
        .await
        .unwrap_err();

    assert!(matches!(
        gemini_kind(&err),
        GeminiErrorKind::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_generate_images_hits_predict() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
        .and(body_partial_json(json!({
            "instances": [{"prompt": "A red kite"}],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "3:4",
                "outputOptions": {"mimeType": "image/jpeg"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "/9j/AAAA", "mimeType": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = GenerateImagesRequest::single_jpeg("A red kite", AspectRatio::PortraitStandard);
    let response = client
        .generate_images("imagen-4.0-generate-001", &request)
        .await?;

    assert_eq!(response.first_image(), Some("/9j/AAAA"));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_maps_to_api_request() {
    // Nothing listens on the discard port.
    let client = GeminiClient::new("test-key", "http://127.0.0.1:9/v1beta").unwrap();
    let err = client
        .generate_content("gemini-2.5-flash", &hello_request())
        .await
        .unwrap_err();

    assert!(matches!(gemini_kind(&err), GeminiErrorKind::ApiRequest(_)));
}
