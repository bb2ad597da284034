use vermeer_error::{
    BuilderError, GeminiError, GeminiErrorKind, StudioError, StudioErrorKind, VermeerError,
    VermeerErrorKind, VermeerResult,
};

fn render() -> VermeerResult<String> {
    Err(StudioError::new(StudioErrorKind::ImageRendering))?
}

#[test]
fn test_studio_error_keeps_fixed_message() {
    let err = render().unwrap_err();

    let studio = err.as_studio().expect("should be a studio error");
    assert_eq!(studio.kind, StudioErrorKind::ImageRendering);
    assert!(err.to_string().contains("Failed to generate image. Please try again."));
}

#[test]
fn test_location_is_captured_at_construction() {
    let err = GeminiError::new(GeminiErrorKind::EmptyResponse);

    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
    assert_eq!(err.status_code(), None);
}

#[test]
fn test_kinds_convert_into_wrapper() {
    let err: VermeerError = BuilderError::new("`contents` must be initialized").into();

    assert!(matches!(err.kind(), VermeerErrorKind::Builder(_)));
    assert!(err.as_studio().is_none());
}

#[test]
fn test_http_status_is_exposed() {
    let err = GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    });

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("HTTP 503 error: overloaded"));
}
