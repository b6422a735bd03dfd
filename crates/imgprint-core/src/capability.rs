//! Capability boundaries for image processing and fingerprinting.
//!
//! The orchestration layer does not decode pixels or compute fingerprints
//! itself; it drives two pluggable capabilities through the traits defined
//! here. Concrete implementations live outside this crate (see the
//! `imgprint-image` backend) or in test code as counting mocks.

use crate::error::CoreResult;

/// Image-processing capability: decode, measure, crop, release.
///
/// Handles produced by this capability may wrap native decoder resources,
/// so the orchestrator releases every handle it acquires exactly once, on
/// every exit path, via [`ScopedImage`]. `release` must be safe to call
/// once per handle; for handle types that are plain owned buffers it can
/// simply drop its argument.
pub trait ImageOps {
    /// An in-memory decoded image.
    type Handle;

    /// Decode raw image bytes into an in-memory image.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnreadableImage`](crate::CoreError) when the bytes are
    /// not a decodable image.
    fn decode(&self, bytes: &[u8]) -> CoreResult<Self::Handle>;

    /// Pixel width and height of a decoded image.
    fn dimensions(&self, image: &Self::Handle) -> (u32, u32);

    /// Extract the region `[x, x+width) x [y, y+height)` as a new handle.
    ///
    /// # Errors
    ///
    /// [`CoreError::Crop`](crate::CoreError) when the region is empty or
    /// extends outside the image bounds.
    fn crop(&self, image: &Self::Handle, x: u32, y: u32, width: u32, height: u32)
        -> CoreResult<Self::Handle>;

    /// Release a handle, freeing any native resources behind it.
    fn release(&self, image: Self::Handle);
}

/// Fingerprinting capability: reduce an image to a 64-bit hash.
///
/// Implementations must be deterministic for identical pixel content. The
/// core assumes nothing else about the algorithm's sampling or grayscale
/// strategy.
pub trait Fingerprint<H> {
    /// Compute the 64-bit fingerprint of an image.
    fn fingerprint(&self, image: &H) -> CoreResult<u64>;

    /// Short algorithm name, used in logs and error context.
    fn name(&self) -> &str;
}

impl<H, F: Fingerprint<H> + ?Sized> Fingerprint<H> for Box<F> {
    fn fingerprint(&self, image: &H) -> CoreResult<u64> {
        (**self).fingerprint(image)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Owning guard for an acquired image handle.
///
/// Releases the handle through the capability when dropped, which makes
/// the release happen on every exit path of the acquiring function —
/// normal return, decode failure, or a fingerprint failure partway through
/// a composite pipeline.
pub struct ScopedImage<'a, O: ImageOps> {
    ops: &'a O,
    handle: Option<O::Handle>,
}

impl<'a, O: ImageOps> ScopedImage<'a, O> {
    /// Take ownership of a freshly acquired handle.
    pub fn new(ops: &'a O, handle: O::Handle) -> Self {
        Self {
            ops,
            handle: Some(handle),
        }
    }

    /// Borrow the held handle.
    pub fn get(&self) -> &O::Handle {
        // Present from construction until drop.
        self.handle.as_ref().expect("handle held until drop")
    }
}

impl<O: ImageOps> Drop for ScopedImage<'_, O> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.ops.release(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockOps;

    #[test]
    fn test_scoped_image_releases_on_drop() {
        let ops = MockOps::new(4, 4);
        {
            let handle = ops.decode(b"img").unwrap();
            let _scoped = ScopedImage::new(&ops, handle);
            assert_eq!(ops.stats().released, 0);
        }
        assert_eq!(ops.stats().released, 1);
    }

    #[test]
    fn test_scoped_image_releases_during_unwind_path() {
        // Guard dropped by early return, same as an error path.
        let ops = MockOps::new(4, 4);
        fn acquire_and_bail(ops: &MockOps) -> CoreResult<()> {
            let scoped = ScopedImage::new(ops, ops.decode(b"img")?);
            let _ = scoped.get();
            Err(crate::CoreError::CompositeNeedsSource)
        }
        assert!(acquire_and_bail(&ops).is_err());
        assert_eq!(ops.stats().released, 1);
    }
}
