use image::GrayImage;
use imageproc::filter::median_filter;

/// Apply median filter to reduce noise
/// Median filter preserves edges better than Gaussian blur
pub fn apply(gray: &GrayImage) -> GrayImage {
    // 3x3 window (radius 1), effective for salt-and-pepper noise
    median_filter(gray, 1, 1)
}
