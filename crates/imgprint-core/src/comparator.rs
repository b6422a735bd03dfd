//! Pairwise image comparison built on the hasher and distance engine.

use serde::{Deserialize, Serialize};

use crate::capability::{Fingerprint, ImageOps};
use crate::distance::DistanceEngine;
use crate::encoding::EncodedHash;
use crate::error::CoreResult;
use crate::orchestrator::{HashInput, Hasher};

/// The three pairwise sub-distances of a composite comparison.
///
/// The sub-distances are independent; no aggregate or weighted score is
/// computed here — thresholding and fusion are the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeDistance {
    /// Whole image vs whole image.
    pub full: u32,
    /// Left half vs left half.
    pub left: u32,
    /// Right half vs right half.
    pub right: u32,
}

impl CompositeDistance {
    /// Largest of the three sub-distances.
    pub fn max(&self) -> u32 {
        self.full.max(self.left).max(self.right)
    }

    /// Smallest of the three sub-distances.
    pub fn min(&self) -> u32 {
        self.full.min(self.left).min(self.right)
    }
}

/// Compares pairs of images (or persisted fingerprints) by Hamming distance.
pub struct Comparator<O: ImageOps, F: Fingerprint<O::Handle>> {
    hasher: Hasher<O, F>,
    engine: DistanceEngine,
}

impl<O: ImageOps, F: Fingerprint<O::Handle>> Comparator<O, F> {
    /// Wrap a hasher with the default distance engine.
    pub fn new(hasher: Hasher<O, F>) -> Self {
        Self::with_engine(hasher, DistanceEngine::default())
    }

    /// Wrap a hasher with an explicit distance engine.
    pub fn with_engine(hasher: Hasher<O, F>, engine: DistanceEngine) -> Self {
        Self { hasher, engine }
    }

    /// The underlying hasher.
    #[inline]
    pub fn hasher(&self) -> &Hasher<O, F> {
        &self.hasher
    }

    /// Hash both inputs and return their Hamming distance.
    pub fn compare(
        &self,
        a: HashInput<'_, O::Handle>,
        b: HashInput<'_, O::Handle>,
    ) -> CoreResult<u32> {
        let hash_a = self.hasher.hash(a)?;
        let hash_b = self.hasher.hash(b)?;
        self.engine.distance(&hash_a, &hash_b)
    }

    /// Composite-hash both inputs and return the three pairwise distances.
    pub fn composite_compare(
        &self,
        a: HashInput<'_, O::Handle>,
        b: HashInput<'_, O::Handle>,
    ) -> CoreResult<CompositeDistance> {
        let composite_a = self.hasher.composite_hash(a)?;
        let composite_b = self.hasher.composite_hash(b)?;
        Ok(CompositeDistance {
            full: self.engine.distance(&composite_a.full, &composite_b.full)?,
            left: self.engine.distance(&composite_a.left, &composite_b.left)?,
            right: self
                .engine
                .distance(&composite_a.right, &composite_b.right)?,
        })
    }

    /// Distance between two previously persisted fingerprints.
    ///
    /// Skips image work entirely; useful when both hashes were computed
    /// earlier and stored by the caller.
    pub fn distance(&self, a: &EncodedHash, b: &EncodedHash) -> CoreResult<u32> {
        self.engine.distance(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::BitCounter;
    use crate::encoding::{encode, Mode};
    use crate::testing::{MockFingerprint, MockOps};

    fn comparator(fingerprint: MockFingerprint) -> Comparator<MockOps, MockFingerprint> {
        Comparator::new(Hasher::new(MockOps::new(10, 10), fingerprint))
    }

    #[test]
    fn test_compare_identical_fingerprints_is_zero() {
        let cmp = comparator(MockFingerprint::constant(0xabc));
        assert_eq!(
            cmp.compare(HashInput::Bytes(b"a"), HashInput::Bytes(b"b"))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_compare_counts_differing_bits() {
        // 0b1100 vs 0b1010: two positions differ.
        let cmp = comparator(MockFingerprint::sequence(vec![0b1100, 0b1010]));
        assert_eq!(
            cmp.compare(HashInput::Bytes(b"a"), HashInput::Bytes(b"b"))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_composite_compare_pairs_regions_independently() {
        // Call order: a.full, a.left, a.right, b.full, b.left, b.right.
        // full: 0 vs 1 -> 1 bit; left: 3 vs 0 -> 2 bits; right: 7 vs 7 -> 0.
        let cmp = comparator(MockFingerprint::sequence(vec![0, 3, 7, 1, 0, 7]));
        let dist = cmp
            .composite_compare(HashInput::Bytes(b"a"), HashInput::Bytes(b"b"))
            .unwrap();
        assert_eq!(
            dist,
            CompositeDistance {
                full: 1,
                left: 2,
                right: 0
            }
        );
        assert_eq!(dist.max(), 2);
        assert_eq!(dist.min(), 0);
    }

    #[test]
    fn test_composite_compare_identical_images_is_all_zero() {
        let cmp = comparator(MockFingerprint::sequence(vec![0xa, 0xb, 0xc]));
        let dist = cmp
            .composite_compare(HashInput::Bytes(b"same"), HashInput::Bytes(b"same"))
            .unwrap();
        assert_eq!(
            dist,
            CompositeDistance {
                full: 0,
                left: 0,
                right: 0
            }
        );
    }

    #[test]
    fn test_composite_compare_releases_all_handles() {
        let cmp = comparator(MockFingerprint::constant(7));
        cmp.composite_compare(HashInput::Bytes(b"a"), HashInput::Bytes(b"b"))
            .unwrap();
        let stats = cmp.hasher().ops().stats();
        assert_eq!(stats.acquired(), 6, "two composite pipelines of three handles");
        assert_eq!(stats.released, 6);
    }

    #[test]
    fn test_distance_on_persisted_fingerprints() {
        let cmp = comparator(MockFingerprint::constant(0));
        let a = encode(0b1111, Mode::Hex);
        let b = encode(0b0111, Mode::Decimal);
        assert_eq!(cmp.distance(&a, &b).unwrap(), 1);
        // No image work happened.
        assert_eq!(cmp.hasher().ops().stats().acquired(), 0);
    }

    #[test]
    fn test_with_engine_uses_selected_counter() {
        let cmp = Comparator::with_engine(
            Hasher::new(MockOps::new(10, 10), MockFingerprint::constant(0)),
            DistanceEngine::new(BitCounter::BitLoop),
        );
        let a = encode(0, Mode::Hex);
        let b = encode(u64::MAX, Mode::Hex);
        assert_eq!(cmp.distance(&a, &b).unwrap(), 64);
    }
}
