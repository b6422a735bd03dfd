//! Gradient (difference) hash.
//!
//! Downsamples to a 9x8 grayscale grid and compares the 8 adjacent pixel
//! pairs in each of the 8 rows: bit `y * 8 + x` is set when the left pixel
//! of the pair is brighter than the right. Robust to rescaling and
//! recompression because only the sign of the horizontal gradient
//! survives into the hash.

use image::{imageops::FilterType, DynamicImage};

use imgprint_core::{CoreResult, Fingerprint};

/// Difference hash over horizontal brightness gradients.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientHash;

impl GradientHash {
    /// Create the algorithm.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprint<DynamicImage> for GradientHash {
    fn fingerprint(&self, image: &DynamicImage) -> CoreResult<u64> {
        // 9 columns so each row yields 8 comparisons
        let gray = image.resize_exact(9, 8, FilterType::Triangle).to_luma8();

        let mut hash = 0u64;
        for y in 0..8 {
            for x in 0..8 {
                let left = gray.get_pixel(x, y)[0];
                let right = gray.get_pixel(x + 1, y)[0];
                if left > right {
                    hash |= 1 << (y * 8 + x);
                }
            }
        }
        Ok(hash)
    }

    fn name(&self) -> &str {
        "gradient"
    }
}
