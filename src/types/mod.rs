//! Core image types for the share pipeline.

mod binary;
mod block;
mod grayscale;
mod share;
mod tone;

pub use binary::{AlphaMode, BinaryImage};
pub use block::Block;
pub use grayscale::GrayscaleImage;
pub use share::{ShareImage, SharePair};
pub use tone::Tone;

pub(crate) use share::stack_tone;
