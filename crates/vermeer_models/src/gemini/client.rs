//! Gemini REST client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument};

use vermeer_config::VermeerConfig;
use vermeer_error::{GeminiError, GeminiErrorKind, VermeerResult};
use vermeer_interface::{
    GenerateContentRequest, GenerateContentResponse, GenerateImagesRequest,
    GenerateImagesResponse, GenerativeModel,
};

use super::GeminiResult;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Google Gemini REST API.
///
/// Holds one pooled `reqwest::Client`; clones share it. The model is chosen
/// per call, so a single client serves every studio component.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Google API error envelope: `{"error": {"code": 429, "message": "...", "status": "..."}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client cannot be built.
    #[instrument(skip(api_key))]
    pub fn new(api_key: impl Into<String>, base_url: &str) -> GeminiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey(
                "API key".to_string(),
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("vermeer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from configuration, reading the key from the
    /// configured environment variable.
    ///
    /// # Errors
    ///
    /// Fails with `MissingApiKey` when the variable is unset or blank.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vermeer_config::VermeerConfig;
    /// use vermeer_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::from_config(&VermeerConfig::load()?)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: &VermeerConfig) -> VermeerResult<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::MissingApiKey(
                config.gemini.api_key_env.clone(),
            ))
        })?;

        Ok(Self::new(api_key, &config.gemini.base_url)?)
    }

    /// Endpoint URL for a model method.
    ///
    /// Accepts both "gemini-2.5-flash" and "models/gemini-2.5-flash".
    fn endpoint(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    /// POST a JSON body and decode a JSON response.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> GeminiResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            let err = Self::status_error(status, &text);
            error!(status = status.as_u16(), error = %err, "Gemini API returned an error status");
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| {
            GeminiError::new(GeminiErrorKind::InvalidResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }

    /// Build an error from a non-success status, preferring the API's own message.
    fn status_error(status: StatusCode, body: &str) -> GeminiError {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(kind) => format!("{}: {}", kind, envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
            Err(_) => body.to_string(),
        };

        GeminiError::new(GeminiErrorKind::HttpError {
            status_code: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    #[instrument(skip(self, req), fields(model = %model, turns = req.contents().len(), tools = req.tools().len()))]
    async fn generate_content(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> VermeerResult<GenerateContentResponse> {
        let url = self.endpoint(model, "generateContent");
        let response: GenerateContentResponse = self.post_json(&url, req).await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                "Gemini usage"
            );
        }

        Ok(response)
    }

    #[instrument(skip(self, req), fields(model = %model, instances = req.instances.len()))]
    async fn generate_images(
        &self,
        model: &str,
        req: &GenerateImagesRequest,
    ) -> VermeerResult<GenerateImagesResponse> {
        let url = self.endpoint(model, "predict");
        Ok(self.post_json(&url, req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
