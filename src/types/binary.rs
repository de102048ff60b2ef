//! Pure black/white images.

use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::error::{EvcError, Result};

use super::Tone;

/// How white samples are written when converting to RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Every pixel is fully opaque.
    #[default]
    Opaque,
    /// White pixels become fully transparent, black stays opaque.
    TransparentWhite,
}

/// A binary image: every sample is exactly 0 or 255.
///
/// Samples are stored as [`Tone`]s, so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: u32,
    height: u32,
    tones: Vec<Tone>,
}

impl BinaryImage {
    /// Create an image from a row-major tone buffer.
    pub fn new(width: u32, height: u32, tones: Vec<Tone>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if tones.len() != expected {
            return Err(EvcError::InvalidImage {
                message: format!(
                    "{}x{} image needs {} samples, got {}",
                    width,
                    height,
                    expected,
                    tones.len()
                ),
                help: None,
            });
        }

        Ok(Self::from_parts(width, height, tones))
    }

    /// Build from a buffer whose length the caller already guarantees.
    pub(crate) fn from_parts(width: u32, height: u32, tones: Vec<Tone>) -> Self {
        debug_assert_eq!(tones.len(), width as usize * height as usize);
        Self {
            width,
            height,
            tones,
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Tone) -> Self {
        let mut tones = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                tones.push(f(x, y));
            }
        }
        Self::from_parts(width, height, tones)
    }

    /// Binarize an arbitrary luma buffer, e.g. a share read back from disk.
    ///
    /// Lossy formats blur the 0/255 levels, so every sample is re-thresholded.
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let tones = image
            .pixels()
            .map(|p| Tone::from_sample(p.0[0], threshold))
            .collect();
        Self::from_parts(width, height, tones)
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

    /// Row-major tones.
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Get the tone at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Tone> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tones
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Row-major 8-bit samples (each 0 or 255).
    pub fn samples(&self) -> Vec<u8> {
        self.tones.iter().map(|t| t.value()).collect()
    }

    /// Number of black pixels.
    pub fn black_count(&self) -> usize {
        self.tones.iter().filter(|t| t.is_black()).count()
    }

    /// Convert to an 8-bit luma buffer.
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([self.tone_at(x, y).value()])
        })
    }

    /// Convert to an RGBA buffer with an alpha channel.
    pub fn to_rgba(&self, alpha: AlphaMode) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            match (self.tone_at(x, y), alpha) {
                (Tone::Black, _) => Rgba([0, 0, 0, 255]),
                (Tone::White, AlphaMode::Opaque) => Rgba([255, 255, 255, 255]),
                (Tone::White, AlphaMode::TransparentWhite) => Rgba([255, 255, 255, 0]),
            }
        })
    }

    fn tone_at(&self, x: u32, y: u32) -> Tone {
        self.tones[y as usize * self.width as usize + x as usize]
    }
}
