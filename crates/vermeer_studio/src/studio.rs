//! The four studio components wired to one model client.

use std::sync::Arc;

use vermeer_config::ModelSettings;
use vermeer_interface::{ContentBackend, GenerativeModel};

use crate::{ChatRelay, CommandRouter, ConceptGenerator, ImageRenderer};

/// Every studio component, sharing one model client.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use vermeer_config::VermeerConfig;
/// use vermeer_models::GeminiClient;
/// use vermeer_studio::{ReferenceContentBackend, Studio};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VermeerConfig::load()?;
/// let client = Arc::new(GeminiClient::from_config(&config)?);
/// let studio = Studio::new(client, Arc::new(ReferenceContentBackend::new()), &config.models);
///
/// let reply = studio.chat().send(&[], "How often should I post?").await;
/// println!("{}", reply);
/// # Ok(())
/// # }
/// ```
pub struct Studio<M: ?Sized, B: ?Sized> {
    chat: ChatRelay<M>,
    router: CommandRouter<M, B>,
    concepts: ConceptGenerator<M>,
    renderer: ImageRenderer<M>,
}

impl<M, B> Studio<M, B>
where
    M: GenerativeModel + ?Sized,
    B: ContentBackend + ?Sized,
{
    /// Build every component from `model`, `backend` and the configured model names.
    pub fn new(model: Arc<M>, backend: Arc<B>, models: &ModelSettings) -> Self {
        Self {
            chat: ChatRelay::new(Arc::clone(&model), models.chat.clone()),
            router: CommandRouter::new(Arc::clone(&model), backend, models.router.clone()),
            concepts: ConceptGenerator::new(Arc::clone(&model), models.concepts.clone()),
            renderer: ImageRenderer::new(model, models.images.clone()),
        }
    }

    /// Chat relay.
    pub fn chat(&self) -> &ChatRelay<M> {
        &self.chat
    }

    /// Command router.
    pub fn router(&self) -> &CommandRouter<M, B> {
        &self.router
    }

    /// Visual concept generator.
    pub fn concepts(&self) -> &ConceptGenerator<M> {
        &self.concepts
    }

    /// Image renderer.
    pub fn renderer(&self) -> &ImageRenderer<M> {
        &self.renderer
    }
}
