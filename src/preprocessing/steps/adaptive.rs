use image::GrayImage;
use imageproc::contrast::adaptive_threshold;

/// 11x11 neighborhood for the local threshold
const BLOCK_RADIUS: u32 = 5;

/// Apply locally-computed thresholding
/// Handles uneven lighting that defeats a single global cutoff
pub fn apply(gray: &GrayImage) -> GrayImage {
    adaptive_threshold(gray, BLOCK_RADIUS)
}
