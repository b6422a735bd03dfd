//! Image-processing capability backed by the `image` crate.

use image::{DynamicImage, GenericImageView};
use tracing::trace;

use imgprint_core::{CoreError, CoreResult, ImageOps};

/// Default [`ImageOps`] implementation over [`DynamicImage`].
///
/// Handles are plain owned pixel buffers, so `release` is just the drop;
/// the explicit hook exists for capabilities whose handles wrap native
/// decoder state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterOps;

impl RasterOps {
    /// Create the capability.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl ImageOps for RasterOps {
    type Handle = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> CoreResult<DynamicImage> {
        let image = image::load_from_memory(bytes).map_err(|e| CoreError::UnreadableImage {
            reason: e.to_string(),
        })?;
        trace!(
            width = image.width(),
            height = image.height(),
            "decoded image"
        );
        Ok(image)
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        image.dimensions()
    }

    fn crop(
        &self,
        image: &DynamicImage,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> CoreResult<DynamicImage> {
        let (image_width, image_height) = image.dimensions();
        let out_of_bounds = x.checked_add(width).map_or(true, |r| r > image_width)
            || y.checked_add(height).map_or(true, |b| b > image_height);
        if width == 0 || height == 0 || out_of_bounds {
            return Err(CoreError::Crop {
                x,
                y,
                width,
                height,
                image_width,
                image_height,
            });
        }
        Ok(image.crop_imm(x, y, width, height))
    }

    fn release(&self, image: DynamicImage) {
        drop(image);
    }
}
