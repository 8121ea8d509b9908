use image::GrayImage;

/// Bounding box of a detected feature (face, body) within an image.
#[derive(Debug, Clone)]
pub struct Detection {
    /// X coordinate of the top-left corner (pixels).
    pub x: u32,
    /// Y coordinate of the top-left corner (pixels).
    pub y: u32,
    /// Width of the bounding box (pixels).
    pub width: u32,
    /// Height of the bounding box (pixels).
    pub height: u32,
    /// Detection confidence score.
    pub score: f64,
}

/// Size constraints and hints passed to a detection backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    /// Minimum feature size in pixels (width, height).
    pub min_size: (u32, u32),
    /// Maximum feature size in pixels (width, height).
    pub max_size: (u32, u32),
    /// Hint: the caller only cares whether anything is detected, so the
    /// backend may stop after its largest/best candidate. Must not change
    /// presence/absence semantics.
    pub largest_only: bool,
}

impl DetectOptions {
    /// Derive size bounds from the image's own dimensions.
    ///
    /// A feature smaller than 1/20 of the image side or larger than half
    /// of it is not a plausible subject for orientation purposes.
    pub fn for_image(width: u32, height: u32, largest_only: bool) -> Self {
        let side = ((width as f64) * (height as f64)).sqrt();
        let min_length = (side / 20.0) as u32;
        let max_length = (side / 2.0) as u32;
        Self {
            min_size: (min_length, min_length),
            max_size: (max_length, max_length),
            largest_only,
        }
    }
}

/// Pluggable detection backend.
///
/// Implement this trait to provide a custom detector (cascade classifier,
/// ONNX model, etc.) and wrap it in a [`DetectorProfile`]. The backend is
/// expected to be deterministic for a fixed input and must return an empty
/// vector, not an error, when nothing is found.
pub trait ObjectDetector: Send + Sync {
    /// Detect features in a grayscale image, subject to `opts` size bounds.
    fn detect(&self, gray: &GrayImage, opts: &DetectOptions) -> Vec<Detection>;
}

/// One named detection configuration in the search priority order.
///
/// Earlier profiles are trusted more: a face cascade usually precedes a
/// full-body cascade, with general-purpose frontal-face profiles last.
pub struct DetectorProfile {
    name: String,
    detector: Box<dyn ObjectDetector>,
}

impl DetectorProfile {
    /// Create a profile from a name and a detection backend.
    pub fn new(name: impl Into<String>, detector: Box<dyn ObjectDetector>) -> Self {
        Self {
            name: name.into(),
            detector,
        }
    }

    /// Profile name, used for logging only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The detection backend behind this profile.
    pub fn detector(&self) -> &dyn ObjectDetector {
        self.detector.as_ref()
    }
}

impl std::fmt::Debug for DetectorProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorProfile")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
