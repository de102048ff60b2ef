pub mod completions;
pub mod encode;
pub mod halftone;
pub mod reveal;

use clap::{Parser, Subcommand};

/// evc - Extended visual cryptography share generator
#[derive(Parser, Debug)]
#[command(name = "evc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a secret image into two shares textured like a cover image
    Encode(encode::EncodeArgs),

    /// Halftone a single image to pure black and white
    Halftone(halftone::HalftoneArgs),

    /// Stack two shares to reveal the secret
    Reveal(reveal::RevealArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Lower-cased file extension, if any.
pub(crate) fn extension(path: &std::path::Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Whether the path names a lossy output format.
pub(crate) fn is_lossy(path: &std::path::Path) -> bool {
    matches!(extension(path).as_str(), "jpg" | "jpeg")
}
