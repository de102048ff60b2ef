//! Single-channel 8-bit intensity grid.

use image::{GrayImage, Luma};

use crate::error::{EvcError, Result};

/// A grayscale image: one 8-bit intensity sample per pixel, row-major.
///
/// Produced by the preprocessor and consumed by the halftone encoder.
/// There is no way to mutate the samples once the image is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl GrayscaleImage {
    /// Create an image from a row-major sample buffer.
    ///
    /// Fails if the buffer length is not `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(EvcError::InvalidImage {
                message: format!(
                    "{}x{} image needs {} samples, got {}",
                    width,
                    height,
                    expected,
                    samples.len()
                ),
                help: None,
            });
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            samples,
        }
    }

    /// Take ownership of an `image` crate luma buffer.
    pub fn from_luma(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            samples: image.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Get the sample at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Convert to an `image` crate luma buffer.
    pub fn to_luma(&self) -> GrayImage {
        let width = self.width as usize;
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([self.samples[y as usize * width + x as usize]])
        })
    }
}
