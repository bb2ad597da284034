//! One-shot command handlers.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use vermeer_core::{AspectRatio, ConceptCard};
use vermeer_error::{IoError, IoErrorKind, JsonError, VermeerResult};
use vermeer_interface::{ContentBackend, GenerativeModel};
use vermeer_studio::{Studio, decode_data_uri};

fn print_json<T: Serialize>(value: &T) -> VermeerResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Route `prompt` and print the result as JSON.
///
/// Routing failures are part of the printed result, not an error.
pub async fn run_command<M, B>(studio: &Studio<M, B>, prompt: &str) -> VermeerResult<()>
where
    M: GenerativeModel + ?Sized,
    B: ContentBackend + ?Sized,
{
    let response = studio.router().route(prompt).await;
    print_json(&response)
}

/// Generate concepts and print them as cards.
pub async fn run_concepts<M, B>(
    studio: &Studio<M, B>,
    brand: &str,
    tone: &str,
    brief: &str,
) -> VermeerResult<()>
where
    M: GenerativeModel + ?Sized,
    B: ContentBackend + ?Sized,
{
    let cards: Vec<ConceptCard> = studio
        .concepts()
        .generate(brand, tone, brief)
        .await?
        .into_iter()
        .map(ConceptCard::new)
        .collect();

    info!(count = cards.len(), "Generated concept cards");
    print_json(&cards)
}

/// Render an image, printing the data URI or writing the JPEG to `out`.
pub async fn run_render<M, B>(
    studio: &Studio<M, B>,
    prompt: &str,
    aspect_ratio: AspectRatio,
    out: Option<&Path>,
) -> VermeerResult<()>
where
    M: GenerativeModel + ?Sized,
    B: ContentBackend + ?Sized,
{
    let uri = studio.renderer().render(prompt, aspect_ratio).await?;

    match out {
        Some(path) => {
            let bytes = decode_data_uri(&uri)?;
            tokio::fs::write(path, &bytes).await.map_err(|e| {
                IoError::new(IoErrorKind::WriteFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            })?;
            info!(path = %path.display(), bytes = bytes.len(), "Wrote rendered image");
        }
        None => println!("{}", uri),
    }

    Ok(())
}
