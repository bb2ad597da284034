//! Message types for the Gemini `generateContent` REST endpoint.
//!
//! # Request Shape
//!
//! ```json
//! {
//!   "contents": [{"role": "user", "parts": [{"text": "Hello"}]}],
//!   "systemInstruction": {"parts": [{"text": "You are ..."}]},
//!   "tools": [{"functionDeclarations": [...]}],
//!   "generationConfig": {"responseMimeType": "application/json", "responseSchema": {...}}
//! }
//! ```
//!
//! # Response Shape
//!
//! ```json
//! {
//!   "candidates": [{"content": {"role": "model", "parts": [...]}, "finishReason": "STOP"}],
//!   "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 40}
//! }
//! ```

use crate::Schema;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use vermeer_core::{ChatTurn, Role};

//
// ─── CONTENT ────────────────────────────────────────────────────────────────
//

/// A conversation turn or instruction block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Author of the turn. Omitted for system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Single-text user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part::text(text)],
        }
    }

    /// Role-less text block, as used for `systemInstruction`.
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

impl From<&ChatTurn> for Content {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: Some(turn.role),
            parts: turn.parts.iter().cloned().map(Part::text).collect(),
        }
    }
}

/// Content part.
///
/// Parts the studio does not understand (executable code, file data, ...)
/// are kept as raw JSON in [`Part::Other`] so a response never fails to
/// decode because of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Function call requested by the model
    FunctionCall(FunctionCallPart),
    /// Inline binary data (images, audio, ...)
    InlineData(InlineDataPart),
    /// Anything else
    Other(serde_json::Value),
}

impl Part {
    /// Text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(TextPart {
            text: text.into(),
            thought: None,
        })
    }
}

/// Text content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPart {
    /// The text
    pub text: String,
    /// Set on reasoning summaries; these are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Function call content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallPart {
    /// The call
    pub function_call: FunctionCall,
}

/// A structured invocation returned instead of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Declared function name
    pub name: String,
    /// Arguments object
    #[serde(default)]
    pub args: serde_json::Value,
}

impl FunctionCall {
    /// String argument by name.
    pub fn str_arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).and_then(serde_json::Value::as_str)
    }
}

/// Inline data content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    /// The data
    pub inline_data: InlineData,
}

/// Base64 data with MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type (e.g. "image/jpeg")
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// A set of functions the model may call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Declared functions
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// One callable function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Function name the model will echo back
    pub name: String,
    /// What the function does, read by the model
    pub description: String,
    /// Parameter object schema
    pub parameters: Schema,
}

/// Generation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Output MIME type ("application/json" for structured output)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Structured output schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

impl GenerationConfig {
    /// Structured JSON output conforming to `schema`.
    pub fn json(schema: Schema) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Default::default()
        }
    }
}

/// `generateContent` request body.
///
/// # Examples
///
/// ```
/// use vermeer_interface::{Content, GenerateContentRequest};
///
/// let request = GenerateContentRequest::builder()
///     .contents(vec![Content::user("Hello")])
///     .system_instruction(Content::instruction("Be brief."))
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["contents"][0]["role"], "user");
/// assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be brief.");
/// assert!(json.get("tools").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, oldest first
    contents: Vec<Content>,
    /// Steering instruction
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    /// Callable functions
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    /// Generation parameters
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// `generateContent` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates (the studio reads only the first)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token accounting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    /// Model version that answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Response whose single candidate holds `parts`.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some(Role::Model),
                    parts,
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            ..Default::default()
        }
    }

    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated answer text of the first candidate.
    ///
    /// Thought parts are skipped. `None` when the candidate has no text.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_interface::{GenerateContentResponse, Part};
    ///
    /// let response = GenerateContentResponse::from_parts(vec![
    ///     Part::text("Hello, "),
    ///     Part::text("world"),
    /// ]);
    /// assert_eq!(response.text().as_deref(), Some("Hello, world"));
    /// assert_eq!(GenerateContentResponse::default().text(), None);
    /// ```
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .first_parts()
            .iter()
            .filter_map(|part| match part {
                Part::Text(t) if t.thought != Some(true) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// Every function call in the first candidate, in order.
    pub fn function_calls(&self) -> Vec<&FunctionCall> {
        self.first_parts()
            .iter()
            .filter_map(|part| match part {
                Part::FunctionCall(p) => Some(&p.function_call),
                _ => None,
            })
            .collect()
    }
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Why generation stopped (e.g. "STOP", "SAFETY")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Token accounting for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Tokens across candidates
    #[serde(default)]
    pub candidates_token_count: u32,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: u32,
}
