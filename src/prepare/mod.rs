//! Image preprocessing.
//!
//! Loads the secret and cover images, converts them to grayscale and resizes
//! both to the same target size so they can be halftoned pixel for pixel.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{EvcError, Result};
use crate::types::GrayscaleImage;

/// Target size used when none is given.
pub const DEFAULT_SIZE: TargetSize = TargetSize {
    width: 256,
    height: 256,
};

/// Width and height both images are resized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        DEFAULT_SIZE
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TargetSize {
    type Err = EvcError;

    /// Parse a "WxH" dimension string.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().splitn(2, |c| c == 'x' || c == 'X').collect();
        if parts.len() != 2 {
            return Err(EvcError::Parse {
                message: format!("Invalid size '{}': expected WxH (e.g. 256x256)", s),
                help: Some("Use the format WxH, for example: 256x256, 512x384".to_string()),
            });
        }

        let width: u32 = parts[0].parse().map_err(|_| EvcError::Parse {
            message: format!("Invalid width '{}' in size '{}'", parts[0], s),
            help: Some("Width must be a positive integer".to_string()),
        })?;

        let height: u32 = parts[1].parse().map_err(|_| EvcError::Parse {
            message: format!("Invalid height '{}' in size '{}'", parts[1], s),
            help: Some("Height must be a positive integer".to_string()),
        })?;

        if width == 0 || height == 0 {
            return Err(EvcError::Parse {
                message: format!("Size must be non-zero, got {}x{}", width, height),
                help: Some("Both width and height must be at least 1".to_string()),
            });
        }

        Ok(Self { width, height })
    }
}

/// Resampling filter used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "nearest"),
            ResampleFilter::Triangle => write!(f, "triangle"),
            ResampleFilter::CatmullRom => write!(f, "catmull-rom"),
            ResampleFilter::Gaussian => write!(f, "gaussian"),
            ResampleFilter::Lanczos3 => write!(f, "lanczos3"),
        }
    }
}

/// Preprocessing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrepareOptions {
    pub size: TargetSize,
    pub filter: ResampleFilter,
}

/// Open and decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| EvcError::ImageLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Convert an image to grayscale and resize it to `size`.
///
/// Images already at the target size are passed through without resampling.
pub fn prepare(image: &DynamicImage, size: TargetSize, filter: ResampleFilter) -> Result<GrayscaleImage> {
    if size.width == 0 || size.height == 0 {
        return Err(EvcError::InvalidImage {
            message: format!("Target size must be non-zero, got {}", size),
            help: None,
        });
    }

    let luma = image.to_luma8();
    if luma.dimensions() == (size.width, size.height) {
        return Ok(GrayscaleImage::from_luma(luma));
    }

    let resized = imageops::resize(&luma, size.width, size.height, filter.filter_type());
    Ok(GrayscaleImage::from_luma(resized))
}

/// Prepare an in-memory secret/cover pair.
pub fn preprocess_images(
    secret: &DynamicImage,
    cover: &DynamicImage,
    options: &PrepareOptions,
) -> Result<(GrayscaleImage, GrayscaleImage)> {
    let secret = prepare(secret, options.size, options.filter)?;
    let cover = prepare(cover, options.size, options.filter)?;

    if secret.dimensions() != cover.dimensions() {
        return Err(EvcError::DimensionMismatch {
            first: secret.dimensions(),
            second: cover.dimensions(),
        });
    }

    Ok((secret, cover))
}

/// Load, grayscale and resize a secret/cover pair from disk.
///
/// Both files are decoded before any processing starts.
pub fn preprocess(
    secret: &Path,
    cover: &Path,
    options: &PrepareOptions,
) -> Result<(GrayscaleImage, GrayscaleImage)> {
    let secret = load_image(secret)?;
    let cover = load_image(cover)?;
    preprocess_images(&secret, &cover, options)
}
