//! Error types for imgprint-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the imgprint-core crate, along with the [`CoreResult<T>`] type alias.

use thiserror::Error;

use crate::encoding::Mode;

/// Top-level error type for imgprint-core operations.
///
/// Provides structured error variants for all failure modes in the core
/// library. No operation retries internally; every error propagates to the
/// caller of the operation that triggered it, after all acquired image
/// handles have been released.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Source bytes could not be decoded into an image.
    ///
    /// # When This Occurs
    ///
    /// - Truncated or corrupt image files
    /// - Byte streams that are not an image at all
    /// - Formats the image-processing capability does not support
    #[error("unreadable image: {reason}")]
    UnreadableImage {
        /// Decoder diagnostic for the failure
        reason: String,
    },

    /// Composite hashing was invoked on an already-decoded image.
    ///
    /// `composite_hash` needs to decode and crop the source itself; a
    /// caller-owned decoded handle cannot be re-cropped through the
    /// capability boundary. Hash the original bytes instead.
    #[error("composite hashing requires a decodable source, not an already-decoded image")]
    CompositeNeedsSource,

    /// A persisted hash string is not a valid encoding for the mode.
    ///
    /// # When This Occurs
    ///
    /// - Non-hex characters in a hex-mode hash
    /// - A hex string longer than 16 digits (more than 64 bits)
    /// - A decimal-mode value that is not a 64-bit integer literal
    #[error("malformed {mode} hash {input:?}: {reason}")]
    MalformedHash {
        /// The rejected input
        input: String,
        /// Encoding mode the input was parsed under
        mode: Mode,
        /// What made the input invalid
        reason: String,
    },

    /// The fingerprinting capability failed on an image.
    #[error("fingerprint algorithm '{algorithm}' failed: {reason}")]
    Fingerprint {
        /// Name of the algorithm that failed
        algorithm: String,
        /// Capability diagnostic for the failure
        reason: String,
    },

    /// A crop region is empty or falls outside the image bounds.
    #[error(
        "crop region {width}x{height} at ({x},{y}) invalid for {image_width}x{image_height} image"
    )]
    Crop {
        /// Left edge of the requested region
        x: u32,
        /// Top edge of the requested region
        y: u32,
        /// Width of the requested region
        width: u32,
        /// Height of the requested region
        height: u32,
        /// Width of the source image
        image_width: u32,
        /// Height of the source image
        image_height: u32,
    },

    /// Configuration is invalid or could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
