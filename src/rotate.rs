use image::DynamicImage;

/// Rotate an image clockwise by a multiple of 90 degrees.
///
/// Angles outside {0, 90, 180, 270} are reduced modulo 360; anything that
/// still is not a right angle leaves the image untouched with a warning,
/// matching the search's output domain.
pub fn apply_rotation(image: &DynamicImage, angle: u32) -> DynamicImage {
    match angle % 360 {
        0 => image.clone(),
        90 => image.rotate90(),
        180 => image.rotate180(),
        270 => image.rotate270(),
        other => {
            tracing::warn!(angle = other, "unsupported rotation angle; leaving image as-is");
            image.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn corner_marked() -> DynamicImage {
        let mut img = RgbImage::from_pixel(3, 2, image::Rgb([0, 0, 0]));
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn zero_is_identity() {
        let img = corner_marked();
        let out = apply_rotation(&img, 0);
        assert_eq!(out.to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn quarter_turn_moves_corner_and_swaps_dimensions() {
        let img = corner_marked();
        let out = apply_rotation(&img, 90).to_rgb8();
        assert_eq!(out.dimensions(), (2, 3));
        // top-left travels to top-right under a clockwise quarter turn
        assert_eq!(out.get_pixel(1, 0), &image::Rgb([255, 0, 0]));
    }

    #[test]
    fn half_turn_moves_corner_to_opposite_corner() {
        let img = corner_marked();
        let out = apply_rotation(&img, 180).to_rgb8();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.get_pixel(2, 1), &image::Rgb([255, 0, 0]));
    }

    #[test]
    fn full_turn_reduces_to_identity() {
        let img = corner_marked();
        let out = apply_rotation(&img, 360);
        assert_eq!(out.to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn non_right_angle_is_left_untouched() {
        let img = corner_marked();
        let out = apply_rotation(&img, 45);
        assert_eq!(out.to_rgb8(), img.to_rgb8());
    }
}
