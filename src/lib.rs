//! evc - Extended visual cryptography
//!
//! Splits a secret image into two black/white shares. Each share on its own
//! shows the halftone texture of a cover image; stacking both reveals the
//! secret.

pub mod cli;
pub mod encode;
pub mod error;
pub mod manifest;
pub mod output;
pub mod prepare;
pub mod render;
pub mod types;

pub use encode::{
    encode_files, encode_grayscale, encode_images, generate_shares, halftone, halftone_with,
    share_blocks, DitherMethod, EncodeOptions, ErrorClamp, HalftoneOptions,
};
pub use error::{EvcError, Result};
pub use manifest::Manifest;
pub use prepare::{preprocess, preprocess_images, PrepareOptions, ResampleFilter, TargetSize};
pub use render::{load_binary, stack, write_binary, write_share, write_share_json, ShareMeta};
pub use types::{AlphaMode, BinaryImage, Block, GrayscaleImage, ShareImage, SharePair, Tone};
