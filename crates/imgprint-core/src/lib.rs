//! imgprint core library
//!
//! Computes compact 64-bit perceptual fingerprints of images and compares
//! them by Hamming distance, for near-duplicate detection and similarity
//! search over image collections.
//!
//! # Architecture
//!
//! This crate is the orchestration and comparison layer:
//! - [`encoding`] — lossless hex/decimal rendering of raw 64-bit hashes,
//!   including full-range sign-bit correctness
//! - [`distance`] — bit-level Hamming distance over encoded or raw hashes
//! - [`capability`] — the pluggable image-processing and fingerprinting
//!   boundaries, with scoped handle release
//! - [`orchestrator`] — single and composite (full/left/right) hashing
//! - [`comparator`] — pairwise distance over images or stored fingerprints
//! - [`config`] — construction-time configuration
//!
//! The actual pixel-to-hash algorithms and image decoding live behind the
//! capability traits; the `imgprint-image` crate provides the default
//! implementations.
//!
//! # Example
//!
//! ```
//! use imgprint_core::{encode, DistanceEngine, Mode};
//!
//! let a = encode(0xdeadbeefcafebabe, Mode::Hex);
//! let b = encode(0xdeadbeefcafebabf, Mode::Hex);
//! let engine = DistanceEngine::default();
//! assert_eq!(engine.distance(&a, &b).unwrap(), 1);
//! ```

pub mod capability;
pub mod comparator;
pub mod config;
pub mod distance;
pub mod encoding;
pub mod error;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use capability::{Fingerprint, ImageOps, ScopedImage};
pub use comparator::{Comparator, CompositeDistance};
pub use config::{Algorithm, HashConfig};
pub use distance::{hamming, BitCounter, DistanceEngine};
pub use encoding::{encode, EncodedHash, Mode};
pub use error::{CoreError, CoreResult};
pub use orchestrator::{CompositeHash, HashInput, Hasher};
