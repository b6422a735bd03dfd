//! Hash orchestration: from image input to encoded fingerprint.
//!
//! [`Hasher`] wires the two capability boundaries together. It owns no
//! state between calls beyond its immutable configuration, so a single
//! instance can serve concurrent callers when its capabilities allow it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::capability::{Fingerprint, ImageOps, ScopedImage};
use crate::encoding::{encode, EncodedHash, Mode};
use crate::error::{CoreError, CoreResult};

/// Input to a hashing operation.
///
/// Composite hashing needs to decode and crop the source itself, so it
/// only accepts the `Bytes` form; plain hashing accepts either.
pub enum HashInput<'a, H> {
    /// Encoded image bytes (a decodable source).
    Bytes(&'a [u8]),
    /// An image the caller has already decoded and still owns. The
    /// orchestrator never releases a borrowed handle.
    Decoded(&'a H),
}

/// Multi-region fingerprint: whole image plus left and right halves.
///
/// The three fields are produced atomically — a failure anywhere in the
/// composite pipeline yields an error and no partial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeHash {
    /// Fingerprint of the full image.
    pub full: EncodedHash,
    /// Fingerprint of columns `[0, width / 2)`.
    pub left: EncodedHash,
    /// Fingerprint of columns `[width / 2, width)`.
    pub right: EncodedHash,
}

impl fmt::Display for CompositeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.full, self.left, self.right)
    }
}

/// Produces encoded fingerprints from images via pluggable capabilities.
///
/// The encoding [`Mode`] is fixed at construction: all hashes produced by
/// one instance use the same mode, and comparing hashes from instances
/// configured with different modes is a caller error.
pub struct Hasher<O: ImageOps, F: Fingerprint<O::Handle>> {
    ops: O,
    algorithm: F,
    mode: Mode,
}

impl<O: ImageOps, F: Fingerprint<O::Handle>> Hasher<O, F> {
    /// Create a hasher with the default mode ([`Mode::Hex`]).
    pub fn new(ops: O, algorithm: F) -> Self {
        Self::with_mode(ops, algorithm, Mode::default())
    }

    /// Create a hasher with an explicit encoding mode.
    pub fn with_mode(ops: O, algorithm: F, mode: Mode) -> Self {
        Self {
            ops,
            algorithm,
            mode,
        }
    }

    /// The encoding mode fixed at construction.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The image-processing capability.
    #[inline]
    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Fingerprint one image and encode the result.
    ///
    /// For `Bytes` input the decoded image lives only for the duration of
    /// the call; the handle is released on success and on failure alike.
    pub fn hash(&self, input: HashInput<'_, O::Handle>) -> CoreResult<EncodedHash> {
        match input {
            HashInput::Decoded(image) => self.hash_image(image),
            HashInput::Bytes(bytes) => {
                let image = ScopedImage::new(&self.ops, self.ops.decode(bytes)?);
                self.hash_image(image.get())
            }
        }
    }

    /// Decode `bytes` and fingerprint the resulting image.
    pub fn hash_bytes(&self, bytes: &[u8]) -> CoreResult<EncodedHash> {
        self.hash(HashInput::Bytes(bytes))
    }

    /// Fingerprint the whole image plus its left and right halves.
    ///
    /// The image is split at the vertical midline `width / 2`: left half
    /// `[0, mid)`, right half `[mid, width)`. For odd widths the right
    /// half is one column wider. All three decoded handles are released on
    /// every exit path, including when a sub-fingerprint fails partway.
    ///
    /// # Errors
    ///
    /// [`CoreError::CompositeNeedsSource`] for `Decoded` input — the
    /// pipeline must decode and crop the source itself.
    pub fn composite_hash(&self, input: HashInput<'_, O::Handle>) -> CoreResult<CompositeHash> {
        let bytes = match input {
            HashInput::Bytes(bytes) => bytes,
            HashInput::Decoded(_) => return Err(CoreError::CompositeNeedsSource),
        };

        let full = ScopedImage::new(&self.ops, self.ops.decode(bytes)?);
        let (width, height) = self.ops.dimensions(full.get());
        let mid = width / 2;
        if mid == 0 {
            warn!(width, "image narrower than two columns; left half is empty");
        }
        debug!(width, height, mid, "splitting image at vertical midline");

        let left = ScopedImage::new(&self.ops, self.ops.crop(full.get(), 0, 0, mid, height)?);
        let right = ScopedImage::new(
            &self.ops,
            self.ops.crop(full.get(), mid, 0, width - mid, height)?,
        );

        let full_raw = self.algorithm.fingerprint(full.get())?;
        let left_raw = self.algorithm.fingerprint(left.get())?;
        let right_raw = self.algorithm.fingerprint(right.get())?;

        Ok(CompositeHash {
            full: encode(full_raw, self.mode),
            left: encode(left_raw, self.mode),
            right: encode(right_raw, self.mode),
        })
    }

    fn hash_image(&self, image: &O::Handle) -> CoreResult<EncodedHash> {
        let raw = self.algorithm.fingerprint(image)?;
        trace!(algorithm = self.algorithm.name(), raw, "fingerprinted image");
        Ok(encode(raw, self.mode))
    }
}
