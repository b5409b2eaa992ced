use image::GrayImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Apply a global binary threshold with an automatically selected level
/// Otsu's method picks the cutoff that best separates ink from background
pub fn apply(gray: &GrayImage) -> GrayImage {
    let level = otsu_level(gray);
    threshold(gray, level, ThresholdType::Binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_threshold_output_is_binary() {
        let gray = GrayImage::from_fn(32, 32, |x, y| Luma([((x + y) * 4).min(255) as u8]));

        let result = apply(&gray);

        for pixel in result.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn test_threshold_separates_text_from_background() {
        // Dark line of "text" on a light page
        let mut gray = GrayImage::from_pixel(40, 20, Luma([230]));
        for x in 5..35 {
            gray.put_pixel(x, 10, Luma([25]));
        }

        let result = apply(&gray);

        assert_eq!(result.get_pixel(20, 10).0[0], 0);
        assert_eq!(result.get_pixel(20, 5).0[0], 255);
    }
}
