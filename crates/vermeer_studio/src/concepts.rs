//! Structured visual concept generation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, instrument};

use vermeer_core::ImageConcept;
use vermeer_error::{
    BuilderError, GeminiError, GeminiErrorKind, JsonError, StudioError, StudioErrorKind,
    VermeerResult,
};
use vermeer_interface::{Content, GenerateContentRequest, GenerationConfig, GenerativeModel};

use crate::prompts::concept_prompt;
use crate::schemas::concept_response_schema;

/// Top-level shape of the structured reply.
#[derive(Debug, Deserialize)]
struct ConceptEnvelope {
    concepts: Vec<ImageConcept>,
}

/// Parse the model's JSON reply into concepts.
fn parse_concepts(text: &str) -> VermeerResult<Vec<ImageConcept>> {
    let envelope: ConceptEnvelope = serde_json::from_str(text)
        .map_err(|e| JsonError::new(format!("Invalid concept JSON: {}", e)))?;

    if envelope.concepts.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into());
    }
    Ok(envelope.concepts)
}

/// Proposes visual concepts for a brand brief.
pub struct ConceptGenerator<M: ?Sized> {
    model: Arc<M>,
    model_name: String,
}

impl<M: GenerativeModel + ?Sized> ConceptGenerator<M> {
    /// Generator using `model_name` on `model`.
    pub fn new(model: Arc<M>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Up to three concepts for `brief`, written for `brand` in `tone`.
    ///
    /// # Errors
    ///
    /// Any failure, remote or parse, is logged and reported as
    /// [`StudioErrorKind::ConceptGeneration`].
    #[instrument(skip(self, brief), fields(model = %self.model_name))]
    pub async fn generate(
        &self,
        brand: &str,
        tone: &str,
        brief: &str,
    ) -> VermeerResult<Vec<ImageConcept>> {
        match self.try_generate(brand, tone, brief).await {
            Ok(concepts) => {
                debug!(count = concepts.len(), "Generated visual concepts");
                Ok(concepts)
            }
            Err(e) => {
                error!(error = %e, "Visual concept generation failed");
                Err(StudioError::new(StudioErrorKind::ConceptGeneration).into())
            }
        }
    }

    async fn try_generate(
        &self,
        brand: &str,
        tone: &str,
        brief: &str,
    ) -> VermeerResult<Vec<ImageConcept>> {
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(concept_prompt(brand, tone, brief))])
            .generation_config(GenerationConfig::json(concept_response_schema()))
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.model.generate_content(&self.model_name, &request).await?;
        let text = response
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        parse_concepts(&text)
    }
}

impl<M: ?Sized> Clone for ConceptGenerator<M> {
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
    use vermeer_core::AspectRatio;

    #[test]
    fn test_parse_concepts() {
        let text = r##"{"concepts": [{
            "title": "Morning Pour",
            "description": "Steam rising from a ceramic cup at sunrise",
            "palette": ["#3b2a1a", "#f2c14e", "#fff8e7"],
            "caption": "Slow mornings, good coffee.",
            "altText": "A cup of coffee on a windowsill at sunrise",
            "aspectRatio": "4:3"
        }]}"##;

        let concepts = parse_concepts(text).unwrap();

        assert_eq!(concepts.len(), 1);
        assert_eq!(concepts[0].aspect_ratio, AspectRatio::LandscapeStandard);
        assert_eq!(concepts[0].palette.len(), 3);
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(parse_concepts(r#"{"concepts": []}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!(parse_concepts(r#"{"ideas": []}"#).is_err());
    }
}
