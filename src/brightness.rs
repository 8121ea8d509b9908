//! Brightness fallback: when no feature is detectable at any profile,
//! scale, or rotation, guess the orientation from which edge of the photo
//! is brightest. Scanned photos tend to have sky, a light background, or a
//! light margin toward the true top of the subject.

use image::imageops::FilterType;
use image::DynamicImage;
use imageproc::filter::gaussian_blur_f32;

/// Each band covers 1/ratio of the image along one axis, full length along
/// the other. Bands overlap in the corners; that is intentional.
const BAND_RATIO: f64 = 3.0;

/// Every band is shrunk to this many pixels per side before sampling.
const SAMPLE_SIZE: u32 = 5;

/// Gaussian sigma equivalent to a 5x5 smoothing kernel, to suppress
/// outlier pixels before taking the mean.
const BLUR_SIGMA: f32 = 1.1;

/// One of the four edge bands of the unrotated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Top rows, full width.
    Top,
    /// Left columns, full height.
    Left,
    /// Bottom rows, full width.
    Bottom,
    /// Right columns, full height.
    Right,
}

impl Band {
    /// Candidate order. Also the tie-break order: on equal means the
    /// earliest band wins, so a uniform image always maps to `Top`.
    pub const ALL: [Band; 4] = [Band::Top, Band::Left, Band::Bottom, Band::Right];

    /// The clockwise rotation that brings this band to the top.
    pub fn rotation(self) -> u32 {
        match self {
            Band::Top => 0,
            Band::Left => 90,
            Band::Bottom => 180,
            Band::Right => 270,
        }
    }

    /// Pixel rectangle `(x, y, width, height)` of this band within an
    /// image of the given dimensions.
    fn region(self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let band_h = ((height as f64 / BAND_RATIO).round() as u32).max(1);
        let band_w = ((width as f64 / BAND_RATIO).round() as u32).max(1);
        match self {
            Band::Top => (0, 0, width, band_h),
            Band::Left => (0, 0, band_w, height),
            Band::Bottom => {
                let y = ((BAND_RATIO - 1.0) * (height as f64 / BAND_RATIO)).round() as u32;
                (0, y.min(height - 1), width, height - y.min(height - 1))
            }
            Band::Right => {
                let x = ((BAND_RATIO - 1.0) * (width as f64 / BAND_RATIO)).round() as u32;
                (x.min(width - 1), 0, width - x.min(width - 1), height)
            }
        }
    }
}

/// Mean intensity of one band after downsampling and smoothing.
fn band_mean(image: &DynamicImage, band: Band) -> f64 {
    let (width, height) = (image.width(), image.height());
    let (x, y, w, h) = band.region(width, height);
    let chunk = image.crop_imm(x, y, w, h);
    let small = chunk
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::CatmullRom)
        .to_luma8();
    let blurred = gaussian_blur_f32(&small, BLUR_SIGMA);
    let sum: f64 = blurred.pixels().map(|p| p[0] as f64).sum();
    sum / (SAMPLE_SIZE * SAMPLE_SIZE) as f64
}

/// Pick the brightest edge band of the original (unrotated, full color)
/// image. Total function: always returns a band, with a stable tie-break
/// in [`Band::ALL`] order.
pub fn brightest_side(image: &DynamicImage) -> Band {
    let mut best = Band::Top;
    let mut best_mean = f64::NEG_INFINITY;
    for band in Band::ALL {
        let mean = band_mean(image, band);
        tracing::debug!(band = ?band, mean, "brightness sample");
        if mean > best_mean {
            best = band;
            best_mean = mean;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    /// 90x90 image filled with `base`, with one band painted `bright`.
    fn banded_image(bright_band: Band, base: u8, bright: u8) -> DynamicImage {
        let mut img = RgbImage::from_pixel(90, 90, image::Rgb([base, base, base]));
        let (x0, y0, w, h) = bright_band.region(90, 90);
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, image::Rgb([bright, bright, bright]));
            }
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn rotation_table() {
        assert_eq!(Band::Top.rotation(), 0);
        assert_eq!(Band::Left.rotation(), 90);
        assert_eq!(Band::Bottom.rotation(), 180);
        assert_eq!(Band::Right.rotation(), 270);
    }

    #[test]
    fn regions_cover_expected_slices() {
        assert_eq!(Band::Top.region(90, 90), (0, 0, 90, 30));
        assert_eq!(Band::Left.region(90, 90), (0, 0, 30, 90));
        assert_eq!(Band::Bottom.region(90, 90), (0, 60, 90, 30));
        assert_eq!(Band::Right.region(90, 90), (60, 0, 30, 90));
    }

    #[test]
    fn regions_never_collapse_on_tiny_images() {
        for band in Band::ALL {
            let (_, _, w, h) = band.region(2, 2);
            assert!(w >= 1 && h >= 1, "{band:?} collapsed on 2x2");
        }
    }

    #[test]
    fn picks_each_bright_band() {
        for band in Band::ALL {
            let img = banded_image(band, 40, 230);
            assert_eq!(brightest_side(&img), band);
        }
    }

    #[test]
    fn uniform_image_ties_break_to_top() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, image::Rgb([180; 3])));
        for _ in 0..3 {
            assert_eq!(brightest_side(&img), Band::Top);
        }
    }

    #[test]
    fn color_channels_average_into_intensity() {
        // A saturated red top band still reads brighter than a dark body.
        let mut img = RgbImage::from_pixel(90, 90, image::Rgb([10, 10, 10]));
        for y in 0..30 {
            for x in 0..90 {
                img.put_pixel(x, y, image::Rgb([220, 60, 60]));
            }
        }
        assert_eq!(brightest_side(&DynamicImage::ImageRgb8(img)), Band::Top);
    }
}
