use crate::error::OcrError;
use async_trait::async_trait;
use image::DynamicImage;
use serde::Serialize;
use std::path::Path;

/// Pixel-coordinate bounding box reported by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A single recognized token with its placement and engine-reported confidence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordObservation {
    pub text: String,
    pub confidence: f32,
    pub position: Position,
}

/// Trait that all OCR engines must implement
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier used in diagnostics
    fn name(&self) -> &'static str;

    /// Recognize plain text from an image file on disk
    async fn recognize_file(&self, path: &Path) -> Result<String, OcrError>;

    /// Recognize per-word text, confidence and bounding boxes from a decoded
    /// image, in the engine's own token order
    async fn recognize_words(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<WordObservation>, OcrError>;
}
