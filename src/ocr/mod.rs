//! Preprocessing-and-recognition pipeline
//!
//! Loads an image, derives preprocessed variants, runs the OCR engine on
//! each and keeps the best textual result. Layout mode is a single
//! pass-through of the engine's per-word output.

use crate::config::Config;
use crate::engine::{OcrEngine, WordObservation};
use crate::engines::TesseractEngine;
use crate::error::OcrError;
use crate::preprocessing::Variant;
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;

/// Returned in basic mode when every variant failed or came back empty
pub const NO_TEXT_SENTINEL: &str =
    "No text was detected in the image after multiple processing attempts.";

pub struct OcrProcessor {
    engine: Arc<dyn OcrEngine>,
}

impl OcrProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: Arc::new(TesseractEngine::new(config)),
        }
    }

    /// Extract plain text from the image at `path`.
    ///
    /// With `preprocess` set, each variant is attempted independently and
    /// the longest non-empty result wins; without it the engine runs
    /// directly on the original file and its output is returned untouched.
    pub async fn recognize_basic(
        &self,
        path: &Path,
        preprocess: bool,
    ) -> Result<String, OcrError> {
        let image = load_image(path)?;

        if !preprocess {
            return self.engine.recognize_file(path).await;
        }

        let mut candidates = Vec::new();
        for variant in Variant::ALL {
            match self.run_variant(variant, &image).await {
                Ok(text) => candidates.push(text),
                Err(err) => {
                    tracing::warn!(
                        variant = variant.tag(),
                        error = %err,
                        "preprocessing variant failed"
                    );
                }
            }
        }

        Ok(select_best(candidates))
    }

    /// Extract per-word observations, skipping whitespace-only tokens and
    /// preserving the engine's token order. No best-of-N selection here.
    pub async fn recognize_layout(
        &self,
        path: &Path,
    ) -> Result<Vec<WordObservation>, OcrError> {
        let image = load_image(path)?;
        let words = self.engine.recognize_words(&image).await?;
        Ok(words
            .into_iter()
            .filter(|w| !w.text.trim().is_empty())
            .collect())
    }

    async fn run_variant(
        &self,
        variant: Variant,
        image: &DynamicImage,
    ) -> Result<String, OcrError> {
        let derived = variant.apply(image);

        // Unique name per invocation; the guard deletes the file on every
        // exit path, recognition errors included
        let temp = tempfile::Builder::new()
            .prefix(&format!("temp_{}_", variant.tag()))
            .suffix(".png")
            .tempfile()
            .map_err(|e| {
                OcrError::PreprocessingError(format!("failed to create temp file: {}", e))
            })?;

        derived
            .save_with_format(temp.path(), image::ImageFormat::Png)
            .map_err(|e| {
                OcrError::PreprocessingError(format!(
                    "failed to write {} image: {}",
                    variant.tag(),
                    e
                ))
            })?;

        self.engine.recognize_file(temp.path()).await
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, OcrError> {
    if !path.exists() {
        return Err(OcrError::FileNotFound(path.display().to_string()));
    }
    image::open(path).map_err(|_| OcrError::UnreadableImage(path.display().to_string()))
}

/// Pick the candidate with the most characters among those with non-empty
/// trimmed content; ties keep the earlier variant. Falls back to the
/// sentinel when nothing qualifies.
fn select_best(candidates: Vec<String>) -> String {
    let mut best: Option<String> = None;

    for text in candidates {
        if text.trim().is_empty() {
            continue;
        }
        let is_longer = best
            .as_ref()
            .map_or(true, |b| text.chars().count() > b.chars().count());
        if is_longer {
            best = Some(text);
        }
    }

    best.unwrap_or_else(|| NO_TEXT_SENTINEL.to_string())
}
