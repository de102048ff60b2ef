//! Image output for halftones and shares.
//!
//! The output format follows the file extension, so `.png` is lossless and
//! `.jpg` gives small but lossy shares.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};

use crate::error::{EvcError, Result};
use crate::prepare::load_image;
use crate::types::{AlphaMode, BinaryImage, ShareImage};

/// Write a binary image as 8-bit grayscale.
pub fn write_binary(image: &BinaryImage, path: &Path) -> Result<()> {
    save(DynamicImage::ImageLuma8(image.to_luma()), path)
}

/// Write a share.
///
/// With [`AlphaMode::Opaque`] the share is written as grayscale; otherwise
/// it is written as RGBA with white pixels transparent.
pub fn write_share(share: &ShareImage, path: &Path, alpha: AlphaMode) -> Result<()> {
    let image = match alpha {
        AlphaMode::Opaque => DynamicImage::ImageLuma8(share.to_luma()),
        AlphaMode::TransparentWhite => DynamicImage::ImageRgba8(share.to_rgba(alpha)),
    };
    save(image, path)
}

/// Load an image from disk and re-binarize it at `threshold`.
///
/// Transparent pixels count as white, matching how transparent shares are
/// written.
pub fn load_binary(path: &Path, threshold: u8) -> Result<BinaryImage> {
    let luma_alpha = load_image(path)?.to_luma_alpha8();
    let luma = GrayImage::from_fn(luma_alpha.width(), luma_alpha.height(), |x, y| {
        let [l, a] = luma_alpha.get_pixel(x, y).0;
        Luma([if a == 0 { 255 } else { l }])
    });
    Ok(BinaryImage::from_luma(&luma, threshold))
}

fn save(image: DynamicImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| EvcError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}
