use image::{DynamicImage, GrayImage};

use super::steps;

/// A preprocessing strategy applied to the source image before recognition.
///
/// Variants are stateless and independent; the pipeline runs all of them and
/// keeps the best textual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Grayscale, then a global Otsu threshold
    Binary,
    /// Grayscale, then a locally-computed threshold
    Adaptive,
    /// Grayscale, noise filter, then a global Otsu threshold
    Denoised,
}

impl Variant {
    /// Attempt order; ties in result selection keep the earliest variant
    pub const ALL: [Variant; 3] = [Variant::Binary, Variant::Adaptive, Variant::Denoised];

    /// Tag used in temp-file names and diagnostics
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Adaptive => "adaptive",
            Self::Denoised => "denoised",
        }
    }

    /// Produce the derived image for this variant
    pub fn apply(&self, image: &DynamicImage) -> GrayImage {
        let gray = steps::grayscale::apply(image);
        match self {
            Self::Binary => steps::threshold::apply(&gray),
            Self::Adaptive => steps::adaptive::apply(&gray),
            Self::Denoised => steps::threshold::apply(&steps::denoise::apply(&gray)),
        }
    }
}
