//! Share generation.
//!
//! Each source pixel expands to a 2x2 block in both shares. Where the secret
//! is white both shares get the same block, chosen by the cover pixel, so
//! stacking them leaves half the block white. Where the secret is black the
//! shares get complementary blocks and the stack is fully black.

use crate::error::{EvcError, Result};
use crate::types::{BinaryImage, Block, ShareImage, SharePair, Tone};

/// Block pair for one (secret, cover) pixel.
///
/// | secret | cover | first share   | second share  |
/// |--------|-------|---------------|---------------|
/// | white  | white | white-pattern | white-pattern |
/// | white  | black | black-pattern | black-pattern |
/// | black  | white | white-pattern | black-pattern |
/// | black  | black | black-pattern | white-pattern |
pub const fn share_blocks(secret: Tone, cover: Tone) -> (Block, Block) {
    use Block::{BlackPattern, WhitePattern};
    match (secret, cover) {
        (Tone::White, Tone::White) => (WhitePattern, WhitePattern),
        (Tone::White, Tone::Black) => (BlackPattern, BlackPattern),
        (Tone::Black, Tone::White) => (WhitePattern, BlackPattern),
        (Tone::Black, Tone::Black) => (BlackPattern, WhitePattern),
    }
}

/// Expand a secret/cover halftone pair into two shares of twice the size.
///
/// Fails with [`EvcError::SizeMismatch`] if the inputs differ in shape.
pub fn generate_shares(secret: &BinaryImage, cover: &BinaryImage) -> Result<SharePair> {
    if secret.dimensions() != cover.dimensions() {
        return Err(EvcError::SizeMismatch {
            secret: secret.dimensions(),
            cover: cover.dimensions(),
        });
    }

    let (width, height) = secret.dimensions();
    let share_width = width as usize * 2;
    let share_height = height as usize * 2;

    let mut first = vec![Tone::Black; share_width * share_height];
    let mut second = vec![Tone::Black; share_width * share_height];

    for (i, (&s, &c)) in secret.tones().iter().zip(cover.tones()).enumerate() {
        let x = i % width as usize;
        let y = i / width as usize;
        let (block1, block2) = share_blocks(s, c);

        write_block(&mut first, share_width, x * 2, y * 2, block1);
        write_block(&mut second, share_width, x * 2, y * 2, block2);
    }

    let first = BinaryImage::from_parts(width * 2, height * 2, first);
    let second = BinaryImage::from_parts(width * 2, height * 2, second);

    Ok(SharePair::new(ShareImage::new(first), ShareImage::new(second)))
}

/// Write a block with its top-left corner at `(ox, oy)`.
fn write_block(tones: &mut [Tone], stride: usize, ox: usize, oy: usize, block: Block) {
    for (dy, row) in block.pattern().iter().enumerate() {
        for (dx, &tone) in row.iter().enumerate() {
            tones[(oy + dy) * stride + ox + dx] = tone;
        }
    }
}
