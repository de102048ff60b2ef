//! Share images and the matched pair they are always produced in.

use image::{GrayImage, RgbaImage};

use super::{AlphaMode, BinaryImage, Tone};

/// One share: a binary image at twice the source resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareImage {
    image: BinaryImage,
}

impl ShareImage {
    pub(crate) fn new(image: BinaryImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Tone> {
        self.image.get(x, y)
    }

    /// The share as a plain binary image.
    pub fn as_binary(&self) -> &BinaryImage {
        &self.image
    }

    pub fn to_luma(&self) -> GrayImage {
        self.image.to_luma()
    }

    /// The alpha-channel form handed to overlay viewers.
    pub fn to_rgba(&self, alpha: AlphaMode) -> RgbaImage {
        self.image.to_rgba(alpha)
    }
}

/// The two shares produced by a single generation call.
///
/// Fields are private so shares from different calls cannot be paired up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePair {
    first: ShareImage,
    second: ShareImage,
}

impl SharePair {
    pub(crate) fn new(first: ShareImage, second: ShareImage) -> Self {
        debug_assert_eq!(first.dimensions(), second.dimensions());
        Self { first, second }
    }

    pub fn first(&self) -> &ShareImage {
        &self.first
    }

    pub fn second(&self) -> &ShareImage {
        &self.second
    }

    /// Get the shared dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.first.dimensions()
    }

    pub fn into_parts(self) -> (ShareImage, ShareImage) {
        (self.first, self.second)
    }

    /// Overlay both shares: a pixel is black if either share is black there.
    pub fn stack(&self) -> BinaryImage {
        let tones = self
            .first
            .image
            .tones()
            .iter()
            .zip(self.second.image.tones())
            .map(|(&a, &b)| stack_tone(a, b))
            .collect();
        let (width, height) = self.dimensions();
        BinaryImage::from_parts(width, height, tones)
    }
}

/// Darken-composite of two tones.
pub(crate) fn stack_tone(a: Tone, b: Tone) -> Tone {
    if a.is_black() || b.is_black() {
        Tone::Black
    } else {
        Tone::White
    }
}
