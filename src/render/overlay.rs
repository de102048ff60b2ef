//! Digital stacking of two shares.

use crate::error::{EvcError, Result};
use crate::types::{stack_tone, BinaryImage};

/// Overlay two same-size binary images: black wherever either is black.
///
/// Use this for shares read back from disk; a freshly generated
/// [`SharePair`](crate::types::SharePair) can be stacked directly.
pub fn stack(first: &BinaryImage, second: &BinaryImage) -> Result<BinaryImage> {
    if first.dimensions() != second.dimensions() {
        return Err(EvcError::DimensionMismatch {
            first: first.dimensions(),
            second: second.dimensions(),
        });
    }

    let tones = first
        .tones()
        .iter()
        .zip(second.tones())
        .map(|(&a, &b)| stack_tone(a, b))
        .collect();

    BinaryImage::new(first.width(), first.height(), tones)
}
