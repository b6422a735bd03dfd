//! Mean (average) hash.
//!
//! Downsamples to an 8x8 grayscale grid and sets bit `y * 8 + x` when the
//! sample is brighter than the mean of all 64 samples. Faster to reason
//! about than the gradient hash but more sensitive to global brightness
//! shifts.

use image::{imageops::FilterType, DynamicImage};

use imgprint_core::{CoreResult, Fingerprint};

/// Average hash: samples compared against the grid mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanHash;

impl MeanHash {
    /// Create the algorithm.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprint<DynamicImage> for MeanHash {
    fn fingerprint(&self, image: &DynamicImage) -> CoreResult<u64> {
        let gray = image.resize_exact(8, 8, FilterType::Triangle).to_luma8();

        let sum: u32 = gray.pixels().map(|p| p[0] as u32).sum();
        let mean = sum / 64;

        let mut hash = 0u64;
        for y in 0..8 {
            for x in 0..8 {
                if u32::from(gray.get_pixel(x, y)[0]) > mean {
                    hash |= 1 << (y * 8 + x);
                }
            }
        }
        Ok(hash)
    }

    fn name(&self) -> &str {
        "mean"
    }
}
