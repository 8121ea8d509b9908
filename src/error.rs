use thiserror::Error;

/// Error type returned by whatsup operations.
#[derive(Debug, Error)]
pub enum WhatsupError {
    /// The input path does not reference an existing file.
    #[error("file '{0}' not found")]
    InputNotFound(String),

    /// The input bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The decoded image has a zero dimension.
    #[error("image dimensions are zero")]
    ZeroDimensions,

    /// A rotated copy of the input could not be written.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// A detection model could not be read or parsed.
    #[error("failed to load detection model '{path}': {reason}")]
    Model {
        /// Path of the model file.
        path: String,
        /// What went wrong while reading it.
        reason: String,
    },
}
