//! Message types for the Imagen `predict` REST endpoint.

use serde::{Deserialize, Serialize};
use vermeer_core::AspectRatio;

/// The only output format the studio asks for.
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// `predict` request body.
///
/// # Examples
///
/// ```
/// use vermeer_core::AspectRatio;
/// use vermeer_interface::GenerateImagesRequest;
///
/// let request = GenerateImagesRequest::single_jpeg("A lighthouse at dusk", AspectRatio::Landscape);
/// let json = serde_json::to_value(&request).unwrap();
///
/// assert_eq!(json["instances"][0]["prompt"], "A lighthouse at dusk");
/// assert_eq!(json["parameters"]["sampleCount"], 1);
/// assert_eq!(json["parameters"]["aspectRatio"], "16:9");
/// assert_eq!(json["parameters"]["outputOptions"]["mimeType"], "image/jpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImagesRequest {
    /// Prompts, one per instance
    pub instances: Vec<ImageInstance>,
    /// Shared generation parameters
    pub parameters: ImageParameters,
}

impl GenerateImagesRequest {
    /// One JPEG image for one prompt.
    pub fn single_jpeg(prompt: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self {
            instances: vec![ImageInstance {
                prompt: prompt.into(),
            }],
            parameters: ImageParameters {
                sample_count: 1,
                aspect_ratio: Some(aspect_ratio),
                output_options: Some(OutputOptions {
                    mime_type: JPEG_MIME_TYPE.to_string(),
                }),
            },
        }
    }
}

/// A single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInstance {
    /// Text prompt
    pub prompt: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageParameters {
    /// Number of images to generate
    pub sample_count: u32,
    /// Output aspect ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    /// Encoding options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_options: Option<OutputOptions>,
}

/// Output encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// MIME type of the encoded image
    pub mime_type: String,
}

/// `predict` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateImagesResponse {
    /// One entry per generated image
    #[serde(default)]
    pub predictions: Vec<ImagePrediction>,
}

/// A generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrediction {
    /// Base64 image bytes; absent when the image was filtered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Why the image was filtered, if it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rai_filtered_reason: Option<String>,
}

impl GenerateImagesResponse {
    /// Response holding one JPEG prediction.
    pub fn single_jpeg(bytes_base64_encoded: impl Into<String>) -> Self {
        Self {
            predictions: vec![ImagePrediction {
                bytes_base64_encoded: Some(bytes_base64_encoded.into()),
                mime_type: Some(JPEG_MIME_TYPE.to_string()),
                rai_filtered_reason: None,
            }],
        }
    }

    /// Base64 bytes of the first unfiltered prediction.
    pub fn first_image(&self) -> Option<&str> {
        self.predictions
            .iter()
            .find_map(|p| p.bytes_base64_encoded.as_deref())
    }
}
