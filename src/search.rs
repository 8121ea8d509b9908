//! The orientation search: for each detector profile in priority order,
//! sweep downscale levels and 90-degree rotation states until something
//! upright is detected, then report how far the image had to be turned.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

use crate::brightness;
use crate::detector::{DetectOptions, DetectorProfile, ObjectDetector};
use crate::preprocess;

/// Fixed constants of the search, passed in explicitly so tests can vary
/// them. The defaults match the classic whatsup sweep: two scale attempts
/// (half resolution, then full) and a full 360-degree rotation cycle.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Starting scale divisor; the sweep counts down to 1 (full resolution).
    pub scale_start: u32,
    /// Number of 90-degree rotation states tried per scale. 4 covers the
    /// full cycle.
    pub rotation_attempts: u32,
    /// Passed through to backends as a short-circuit hint.
    pub largest_only: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scale_start: 2,
            rotation_attempts: 4,
            largest_only: true,
        }
    }
}

/// Rotate the image 90 degrees clockwise at a time until the detector
/// reports at least one hit, for at most `rotation_attempts` states.
///
/// Returns `offset * 90` where `offset` is the number of clockwise
/// rotations already applied when detection succeeded: rotating the
/// original by exactly that angle is what made the feature upright.
/// `None` means no detectable feature at this scale — a normal outcome,
/// not an error.
pub fn upright_rotation(
    gray: &GrayImage,
    detector: &dyn ObjectDetector,
    config: &SearchConfig,
) -> Option<u32> {
    let (width, height) = gray.dimensions();
    // Rotation preserves area, so the size bounds hold for every state.
    let opts = DetectOptions::for_image(width, height, config.largest_only);

    if config.rotation_attempts == 0 {
        return None;
    }
    if !detector.detect(gray, &opts).is_empty() {
        return Some(0);
    }

    let mut rotated = imageops::rotate90(gray);
    for offset in 1..config.rotation_attempts {
        if !detector.detect(&rotated, &opts).is_empty() {
            return Some(offset * 90);
        }
        rotated = imageops::rotate90(&rotated);
    }
    None
}

/// Run the scale/rotation sweep for each profile in priority order.
///
/// Scales go from `scale_start` (cheap, downscaled) to 1 (full resolution,
/// most accurate). The first detection anywhere terminates the entire
/// search: a hit from a higher-priority profile is trusted over anything a
/// later profile might find.
pub fn search_profiles(
    gray: &GrayImage,
    profiles: &[DetectorProfile],
    config: &SearchConfig,
) -> Option<u32> {
    let (width, height) = gray.dimensions();
    for profile in profiles {
        let mut counter = config.scale_start.max(1);
        while counter >= 1 {
            let resized;
            let candidate: &GrayImage = if counter > 1 {
                let new_w = ((width as f64 / counter as f64).round() as u32).max(1);
                let new_h = ((height as f64 / counter as f64).round() as u32).max(1);
                resized = imageops::resize(gray, new_w, new_h, FilterType::CatmullRom);
                &resized
            } else {
                gray
            };

            tracing::debug!(
                profile = profile.name(),
                scale = counter,
                width = candidate.width(),
                height = candidate.height(),
                "detection attempt"
            );

            if let Some(angle) = upright_rotation(candidate, profile.detector(), config) {
                tracing::debug!(profile = profile.name(), scale = counter, angle, "hit");
                return Some(angle);
            }
            counter -= 1;
        }
    }
    None
}

/// Top-level orientation search: profile sweep first, brightness fallback
/// when every profile, scale, and rotation comes up empty.
pub struct OrientationSearch {
    profiles: Vec<DetectorProfile>,
    config: SearchConfig,
}

impl OrientationSearch {
    /// Create a search over the given profiles, in priority order, with
    /// the default configuration.
    pub fn new(profiles: Vec<DetectorProfile>) -> Self {
        Self {
            profiles,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Determine the clockwise rotation, in degrees, that orients the
    /// image correctly. Always returns one of 0, 90, 180, or 270: when no
    /// feature is detectable the brightest edge band decides.
    pub fn run(&self, original: &DynamicImage) -> u32 {
        let gray = preprocess::detection_image(original);
        if let Some(angle) = search_profiles(&gray, &self.profiles, &self.config) {
            return angle;
        }
        let band = brightness::brightest_side(original);
        tracing::debug!(?band, "no detections; using brightness fallback");
        band.rotation()
    }
}
