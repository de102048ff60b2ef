//! Output for halftones and shares.
//!
//! Writes share images to disk, reads them back, stacks them, and records
//! how a pair was produced.

mod meta;
mod overlay;
mod png;

pub use meta::{write_share_json, ShareMeta};
pub use overlay::stack;
pub use png::{load_binary, write_binary, write_share};
