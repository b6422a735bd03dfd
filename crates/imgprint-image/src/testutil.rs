//! Synthetic image builders shared by the in-crate test modules.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};

/// Encode an image as PNG bytes.
pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encoding of a synthetic image");
    bytes
}

/// Grayscale ramp from dark to bright across the width (or the reverse).
pub fn horizontal_ramp(width: u32, height: u32, descending: bool) -> DynamicImage {
    let buffer = GrayImage::from_fn(width, height, |x, _| {
        let step = if descending { width - 1 - x } else { x };
        Luma([(step * 255 / (width - 1)) as u8])
    });
    DynamicImage::ImageLuma8(buffer)
}

/// Checkerboard of alternating black and white pixels.
pub fn checkerboard(width: u32, height: u32) -> DynamicImage {
    let buffer = GrayImage::from_fn(width, height, |x, y| {
        Luma([if (x + y) % 2 == 0 { 0 } else { 255 }])
    });
    DynamicImage::ImageLuma8(buffer)
}

/// Vertical stripes alternating black and white every `stripe` columns.
pub fn stripes(width: u32, height: u32, stripe: u32) -> DynamicImage {
    let buffer = GrayImage::from_fn(width, height, |x, _| {
        Luma([if (x / stripe) % 2 == 0 { 255 } else { 0 }])
    });
    DynamicImage::ImageLuma8(buffer)
}

/// Flat left half and flat right half, split at the column midpoint.
pub fn split_halves(width: u32, height: u32, left: u8, right: u8) -> DynamicImage {
    let mid = width / 2;
    let buffer = GrayImage::from_fn(width, height, |x, _| {
        Luma([if x < mid { left } else { right }])
    });
    DynamicImage::ImageLuma8(buffer)
}
