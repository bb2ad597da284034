//! Image rendering to data URIs.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, error, instrument, warn};

use vermeer_core::AspectRatio;
use vermeer_error::{GeminiError, GeminiErrorKind, StudioError, StudioErrorKind, VermeerResult};
use vermeer_interface::{GenerateImagesRequest, GenerativeModel};

/// Prefix of every rendered image URI.
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Decode a base64 data URI into raw bytes.
///
/// Any media type is accepted as long as the payload is base64.
///
/// # Examples
///
/// ```
/// use vermeer_studio::decode_data_uri;
///
/// assert_eq!(decode_data_uri("data:image/jpeg;base64,/9j/").unwrap(), vec![0xff, 0xd8, 0xff]);
/// assert!(decode_data_uri("https://example.com/cat.jpg").is_err());
/// ```
pub fn decode_data_uri(uri: &str) -> VermeerResult<Vec<u8>> {
    let invalid = |reason: &str| StudioError::new(StudioErrorKind::InvalidDataUri(reason.to_string()));

    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| invalid("missing data: scheme"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("missing payload separator"))?;
    if !header.ends_with(";base64") {
        return Err(invalid("payload is not base64").into());
    }

    Ok(STANDARD
        .decode(payload.trim())
        .map_err(|e| invalid(&e.to_string()))?)
}

/// Renders a prompt into a single JPEG image.
pub struct ImageRenderer<M: ?Sized> {
    model: Arc<M>,
    model_name: String,
}

impl<M: GenerativeModel + ?Sized> ImageRenderer<M> {
    /// Renderer using the image model `model_name` on `model`.
    pub fn new(model: Arc<M>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Render `prompt` at `aspect_ratio` and return a JPEG data URI.
    ///
    /// # Errors
    ///
    /// Any failure is logged and reported as [`StudioErrorKind::ImageRendering`].
    #[instrument(skip(self, prompt), fields(model = %self.model_name, aspect_ratio = %aspect_ratio))]
    pub async fn render(&self, prompt: &str, aspect_ratio: AspectRatio) -> VermeerResult<String> {
        match self.try_render(prompt, aspect_ratio).await {
            Ok(uri) => {
                debug!(bytes = uri.len(), "Rendered image");
                Ok(uri)
            }
            Err(e) => {
                error!(error = %e, "Image rendering failed");
                Err(StudioError::new(StudioErrorKind::ImageRendering).into())
            }
        }
    }

    async fn try_render(&self, prompt: &str, aspect_ratio: AspectRatio) -> VermeerResult<String> {
        let request = GenerateImagesRequest::single_jpeg(prompt, aspect_ratio);
        let response = self.model.generate_images(&self.model_name, &request).await?;

        if let Some(reason) = response
            .predictions
            .iter()
            .find_map(|p| p.rai_filtered_reason.as_deref())
        {
            warn!(reason = %reason, "Image prediction was filtered");
        }

        let image = response
            .first_image()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        Ok(format!("{}{}", DATA_URI_PREFIX, image))
    }
}

impl<M: ?Sized> Clone for ImageRenderer<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            model_name: self.model_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_base64_header() {
        let err = decode_data_uri("data:text/plain,hello").unwrap_err();
        assert!(matches!(
            err.as_studio().map(|e| &e.kind),
            Some(StudioErrorKind::InvalidDataUri(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_payload() {
        assert!(decode_data_uri("data:image/jpeg;base64,@@@").is_err());
    }
}
