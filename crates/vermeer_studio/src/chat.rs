//! Free-form conversation with the hosted model.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use vermeer_core::ChatTurn;
use vermeer_error::{BuilderError, GeminiError, GeminiErrorKind, VermeerResult};
use vermeer_interface::{Content, GenerateContentRequest, GenerativeModel};

use crate::prompts::{CHAT_FALLBACK_REPLY, CHAT_SYSTEM_INSTRUCTION};

/// Relays a conversation to the model and returns its reply.
///
/// The relay keeps no state; the caller owns the history and passes it in
/// on every call.
pub struct ChatRelay<M: ?Sized> {
    model: Arc<M>,
    model_name: String,
}

impl<M: GenerativeModel + ?Sized> ChatRelay<M> {
    /// Relay using `model_name` on `model`.
    pub fn new(model: Arc<M>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Send `message` after `history` and return the reply text.
    ///
    /// Never fails: any error is logged and replaced by
    /// [`CHAT_FALLBACK_REPLY`].
    #[instrument(skip(self, history, message), fields(model = %self.model_name, turns = history.len()))]
    pub async fn send(&self, history: &[ChatTurn], message: &str) -> String {
        match self.try_send(history, message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Chat request failed");
                CHAT_FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn try_send(&self, history: &[ChatTurn], message: &str) -> VermeerResult<String> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(message));

        let request = GenerateContentRequest::builder()
            .contents(contents)
            .system_instruction(Content::instruction(CHAT_SYSTEM_INSTRUCTION))
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.model.generate_content(&self.model_name, &request).await?;

        match response.text() {
            Some(text) if !text.trim().is_empty() => {
                debug!(chars = text.len(), "Received chat reply");
                Ok(text)
            }
            _ => {
                warn!(
                    finish_reason = ?response.candidates.first().and_then(|c| c.finish_reason.as_deref()),
                    "Chat response carried no text"
                );
                Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into())
            }
        }
    }
}

impl<M: ?Sized> Clone for ChatRelay<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            model_name: self.model_name.clone(),
        }
    }
}
