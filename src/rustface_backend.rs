use std::io::Cursor;
use std::path::Path;

use image::GrayImage;

use crate::detector::{DetectOptions, Detection, ObjectDetector};
use crate::error::WhatsupError;

/// Detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is read from a file supplied by the caller, so one backend
/// instance corresponds to one cascade profile.
pub struct SeetaFaceDetector {
    model: rustface::Model,
}

impl SeetaFaceDetector {
    /// Load a SeetaFace model file.
    pub fn from_model_path(path: &Path) -> Result<Self, WhatsupError> {
        let bytes = std::fs::read(path).map_err(|e| WhatsupError::Model {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let model = rustface::read_model(Cursor::new(bytes)).map_err(|e| WhatsupError::Model {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { model })
    }
}

impl ObjectDetector for SeetaFaceDetector {
    fn detect(&self, gray: &GrayImage, opts: &DetectOptions) -> Vec<Detection> {
        // The rustface detector is stateful; build a fresh one per call so
        // the adapter stays `&self`.
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(opts.min_size.0.max(20));
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let (width, height) = gray.dimensions();
        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));

        let mut detections: Vec<Detection> = faces
            .iter()
            .filter(|face| {
                // rustface has no upper size bound; enforce it here.
                let bbox = face.bbox();
                bbox.width() <= opts.max_size.0 && bbox.height() <= opts.max_size.1
            })
            .map(|face| {
                let bbox = face.bbox();
                Detection {
                    x: bbox.x().max(0) as u32,
                    y: bbox.y().max(0) as u32,
                    width: bbox.width(),
                    height: bbox.height(),
                    score: face.score(),
                }
            })
            .collect();

        if opts.largest_only && detections.len() > 1 {
            detections.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            detections.truncate(1);
        }
        detections
    }
}
