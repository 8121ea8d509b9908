use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::contrast::equalize_histogram;

/// Contrast multiplier applied before grayscale conversion. Scanned photos
/// are often washed out; a mild boost helps the cascades latch on.
const CONTRAST_FACTOR: f32 = 1.25;

/// Multiply every channel by `factor`, saturating at 255. No brightness
/// offset is applied.
pub(crate) fn scale_contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let scaled = |v: u8| (v as f32 * factor).round().clamp(0.0, 255.0) as u8;
        out.put_pixel(x, y, image::Rgb([scaled(r), scaled(g), scaled(b)]));
    }
    out
}

/// Build the single-channel image the detectors run on: contrast scaling,
/// grayscale conversion, histogram equalization.
///
/// The brightness fallback deliberately does *not* use this copy — it reads
/// the untouched original pixels.
pub fn detection_image(original: &DynamicImage) -> GrayImage {
    let boosted = scale_contrast(&original.to_rgb8(), CONTRAST_FACTOR);
    let gray = image::imageops::grayscale(&boosted);
    equalize_histogram(&gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_rgb(width: u32, height: u32) -> RgbImage {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
            ]);
        }
        img
    }

    #[test]
    fn contrast_scales_and_saturates() {
        let mut img = RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([100, 100, 100]));
        img.put_pixel(0, 1, image::Rgb([250, 250, 250]));
        let out = scale_contrast(&img, 1.25);
        assert_eq!(out.get_pixel(0, 0), &image::Rgb([125, 125, 125]));
        // 250 * 1.25 = 312.5 clamps to 255
        assert_eq!(out.get_pixel(0, 1), &image::Rgb([255, 255, 255]));
    }

    #[test]
    fn contrast_of_one_is_identity() {
        let img = gradient_rgb(16, 16);
        let out = scale_contrast(&img, 1.0);
        assert_eq!(out, img);
    }

    #[test]
    fn detection_image_preserves_dimensions() {
        let original = DynamicImage::ImageRgb8(gradient_rgb(120, 80));
        let gray = detection_image(&original);
        assert_eq!(gray.dimensions(), (120, 80));
    }

    #[test]
    fn detection_image_stretches_dynamic_range() {
        // A low-contrast image should span (close to) the full range after
        // equalization.
        let mut img = RgbImage::new(32, 32);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            let v = 100 + (x % 16) as u8; // values in [100, 115]
            *pixel = image::Rgb([v, v, v]);
        }
        let gray = detection_image(&DynamicImage::ImageRgb8(img));
        let max = gray.pixels().map(|p| p[0]).max().unwrap();
        let min = gray.pixels().map(|p| p[0]).min().unwrap();
        assert!(max > 200, "max {max} should be stretched upward");
        assert!(max - min > 100, "range {}..{} too narrow", min, max);
    }
}
