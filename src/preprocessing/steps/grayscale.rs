use image::{DynamicImage, GrayImage};

/// Convert image to grayscale
/// Every preprocessing variant starts from this
pub fn apply(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}
