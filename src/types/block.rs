//! The two 2x2 checkerboard blocks shares are built from.

use super::Tone;

/// A 2x2 diagonal checkerboard written into a share for each source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// `[[255, 0], [0, 255]]`
    WhitePattern,
    /// `[[0, 255], [255, 0]]`
    BlackPattern,
}

impl Block {
    /// The block's tones, indexed `[row][column]`.
    pub const fn pattern(self) -> [[Tone; 2]; 2] {
        use Tone::{Black, White};
        match self {
            Block::WhitePattern => [[White, Black], [Black, White]],
            Block::BlackPattern => [[Black, White], [White, Black]],
        }
    }

    /// The block's 8-bit samples, indexed `[row][column]`.
    pub const fn samples(self) -> [[u8; 2]; 2] {
        let [[a, b], [c, d]] = self.pattern();
        [[a.value(), b.value()], [c.value(), d.value()]]
    }

    /// The block a cover pixel of this tone selects.
    pub const fn for_tone(tone: Tone) -> Self {
        match tone {
            Tone::White => Block::WhitePattern,
            Tone::Black => Block::BlackPattern,
        }
    }

    /// The diagonally opposite block.
    pub const fn complement(self) -> Self {
        match self {
            Block::WhitePattern => Block::BlackPattern,
            Block::BlackPattern => Block::WhitePattern,
        }
    }
}
