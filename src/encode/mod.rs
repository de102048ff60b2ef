//! Encoding pipeline: halftone a secret/cover pair and expand it into shares.

mod halftone;
mod shares;

use std::path::Path;

use image::DynamicImage;

use crate::error::Result;
use crate::prepare::{preprocess, preprocess_images, PrepareOptions};
use crate::types::{GrayscaleImage, SharePair};

pub use halftone::{
    halftone, halftone_with, DitherMethod, ErrorClamp, HalftoneOptions, DEFAULT_THRESHOLD,
};
pub use shares::{generate_shares, share_blocks};

/// Settings for a full encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub prepare: PrepareOptions,
    pub halftone: HalftoneOptions,
}

/// Halftone both grayscale images and generate the share pair.
pub fn encode_grayscale(
    secret: &GrayscaleImage,
    cover: &GrayscaleImage,
    options: &HalftoneOptions,
) -> Result<SharePair> {
    let secret = halftone_with(secret, options);
    let cover = halftone_with(cover, options);
    generate_shares(&secret, &cover)
}

/// Run the whole pipeline on decoded images.
pub fn encode_images(
    secret: &DynamicImage,
    cover: &DynamicImage,
    options: &EncodeOptions,
) -> Result<SharePair> {
    let (secret, cover) = preprocess_images(secret, cover, &options.prepare)?;
    encode_grayscale(&secret, &cover, &options.halftone)
}

/// Run the whole pipeline on image files.
pub fn encode_files(secret: &Path, cover: &Path, options: &EncodeOptions) -> Result<SharePair> {
    let (secret, cover) = preprocess(secret, cover, &options.prepare)?;
    encode_grayscale(&secret, &cover, &options.halftone)
}
