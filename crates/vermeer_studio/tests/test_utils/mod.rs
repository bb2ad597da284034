//! Scripted model double for studio component tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use vermeer_error::{GeminiError, GeminiErrorKind, VermeerResult};
use vermeer_interface::{
    GenerateContentRequest, GenerateContentResponse, GenerateImagesRequest,
    GenerateImagesResponse, GenerativeModel, Part,
};

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// `generateContent` success
    Content(GenerateContentResponse),
    /// `predict` success
    Images(GenerateImagesResponse),
    /// Failure with the given kind
    Error(GeminiErrorKind),
}

/// A request the mock received.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Content {
        model: String,
        request: GenerateContentRequest,
    },
    Images {
        model: String,
        request: GenerateImagesRequest,
    },
}

/// Model double that replays scripted replies in order and records requests.
///
/// Once the script runs out every call fails with `EmptyResponse`.
#[derive(Clone, Default)]
pub struct MockModel {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockModel {
    /// Mock replaying `replies`.
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock answering once with plain text.
    pub fn text(text: &str) -> Self {
        Self::new(vec![MockReply::Content(GenerateContentResponse::from_parts(
            vec![Part::text(text)],
        ))])
    }

    /// Mock answering once with the given parts.
    pub fn parts(parts: Vec<Part>) -> Self {
        Self::new(vec![MockReply::Content(GenerateContentResponse::from_parts(
            parts,
        ))])
    }

    /// Mock answering once with one JPEG prediction.
    pub fn image(bytes_base64: &str) -> Self {
        Self::new(vec![MockReply::Images(GenerateImagesResponse::single_jpeg(
            bytes_base64,
        ))])
    }

    /// Mock failing once with `kind`.
    pub fn failing(kind: GeminiErrorKind) -> Self {
        Self::new(vec![MockReply::Error(kind)])
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only `generateContent` request received.
    pub fn single_content_request(&self) -> GenerateContentRequest {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call");
        match &calls[0] {
            RecordedCall::Content { request, .. } => request.clone(),
            other => panic!("expected generateContent call, got {other:?}"),
        }
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockReply::Error(GeminiErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_content(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> VermeerResult<GenerateContentResponse> {
        self.calls.lock().unwrap().push(RecordedCall::Content {
            model: model.to_string(),
            request: req.clone(),
        });

        match self.next_reply() {
            MockReply::Content(response) => Ok(response),
            MockReply::Error(kind) => Err(GeminiError::new(kind).into()),
            MockReply::Images(_) => Err(GeminiError::new(GeminiErrorKind::InvalidResponse(
                "scripted image reply for a content call".to_string(),
            ))
            .into()),
        }
    }

    async fn generate_images(
        &self,
        model: &str,
        req: &GenerateImagesRequest,
    ) -> VermeerResult<GenerateImagesResponse> {
        self.calls.lock().unwrap().push(RecordedCall::Images {
            model: model.to_string(),
            request: req.clone(),
        });

        match self.next_reply() {
            MockReply::Images(response) => Ok(response),
            MockReply::Error(kind) => Err(GeminiError::new(kind).into()),
            MockReply::Content(_) => Err(GeminiError::new(GeminiErrorKind::InvalidResponse(
                "scripted content reply for an image call".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
