//! imgprint image backend
//!
//! Default implementations of the imgprint-core capability boundaries:
//! [`RasterOps`] decodes and crops images through the `image` crate, and
//! [`GradientHash`]/[`MeanHash`] are the built-in fingerprint algorithms.
//! The `*_from_config` constructors wire a [`HashConfig`] into ready-made
//! hasher and comparator instances.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use image::{DynamicImage, GrayImage, ImageFormat};
//! use imgprint_core::{HashConfig, HashInput};
//! use imgprint_image::comparator_from_config;
//!
//! let image = DynamicImage::ImageLuma8(GrayImage::new(16, 16));
//! let mut bytes = Vec::new();
//! image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
//!
//! let comparator = comparator_from_config(&HashConfig::default());
//! let distance = comparator
//!     .compare(HashInput::Bytes(&bytes), HashInput::Bytes(&bytes))
//!     .unwrap();
//! assert_eq!(distance, 0);
//! ```

pub mod gradient;
pub mod mean;
pub mod ops;

#[cfg(test)]
pub(crate) mod testutil;

pub use gradient::GradientHash;
pub use mean::MeanHash;
pub use ops::RasterOps;

use image::DynamicImage;

use imgprint_core::{
    Algorithm, Comparator, DistanceEngine, Fingerprint, HashConfig, Hasher,
};

/// A fingerprint algorithm selected at runtime.
pub type BoxedFingerprint = Box<dyn Fingerprint<DynamicImage> + Send + Sync>;

/// Build the fingerprint algorithm named by the config enum.
pub fn build_algorithm(algorithm: Algorithm) -> BoxedFingerprint {
    match algorithm {
        Algorithm::Gradient => Box::new(GradientHash::new()),
        Algorithm::Mean => Box::new(MeanHash::new()),
    }
}

/// Construct a hasher over the default image backend from a config.
pub fn hasher_from_config(config: &HashConfig) -> Hasher<RasterOps, BoxedFingerprint> {
    Hasher::with_mode(
        RasterOps::new(),
        build_algorithm(config.algorithm),
        config.mode,
    )
}

/// Construct a comparator over the default image backend from a config.
pub fn comparator_from_config(config: &HashConfig) -> Comparator<RasterOps, BoxedFingerprint> {
    Comparator::with_engine(
        hasher_from_config(config),
        DistanceEngine::new(config.bit_counter),
    )
}
