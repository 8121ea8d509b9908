//! Determine the clockwise rotation (0, 90, 180, or 270 degrees) that puts
//! a scanned photograph the right way up.
//!
//! The search tries each detection profile in priority order, sweeping
//! downscale levels and 90-degree rotation states until an upright feature
//! is found. When nothing is detectable, a brightness heuristic picks the
//! rotation that brings the brightest edge of the photo to the top, so an
//! answer is always produced.
//!
//! # Example
//!
//! ```no_run
//! use whatsup::{OrientationSearch, SearchConfig};
//!
//! let photo = image::open("scan.jpg").unwrap();
//! let rotation = OrientationSearch::new(Vec::new())
//!     .config(SearchConfig::default())
//!     .run(&photo);
//! println!("rotate clockwise by {rotation} degrees");
//! ```
#![warn(missing_docs)]

/// Brightness-based orientation fallback.
pub mod brightness;
/// Detection traits and data types.
pub mod detector;
mod error;
/// Pixel preparation for the detection pass.
pub mod preprocess;
mod rotate;
/// The scale/rotation/profile search.
pub mod search;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based detection backend.
pub mod rustface_backend;

/// Error type returned by whatsup operations.
pub use error::WhatsupError;

/// Brightness fallback band and entry point.
pub use brightness::{brightest_side, Band};
/// Detection interface and profile types.
pub use detector::{DetectOptions, Detection, DetectorProfile, ObjectDetector};
/// Apply a 0/90/180/270 clockwise rotation to an image.
pub use rotate::apply_rotation;
/// Search entry points and configuration.
pub use search::{search_profiles, upright_rotation, OrientationSearch, SearchConfig};

#[cfg(feature = "rustface")]
/// Built-in detector that loads a SeetaFace model from a file.
pub use rustface_backend::SeetaFaceDetector;
