//! JSON sidecar describing how a share pair was produced.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::encode::EncodeOptions;
use crate::error::{EvcError, Result};

/// Provenance of a generated share pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareMeta {
    pub secret: String,
    pub cover: String,
    /// Halftone size as `[width, height]`.
    pub size: [u32; 2],
    /// Share size as `[width, height]`.
    pub share_size: [u32; 2],
    pub dither: String,
    pub threshold: u8,
    pub filter: String,
    pub transparent: bool,
    pub shares: [String; 2],
}

impl ShareMeta {
    /// Describe a run of the pipeline.
    pub fn new(
        secret: &Path,
        cover: &Path,
        options: &EncodeOptions,
        transparent: bool,
        shares: [&Path; 2],
    ) -> Self {
        let size = options.prepare.size;
        Self {
            secret: secret.display().to_string(),
            cover: cover.display().to_string(),
            size: [size.width, size.height],
            share_size: [size.width * 2, size.height * 2],
            dither: options.halftone.method.to_string(),
            threshold: options.halftone.threshold,
            filter: options.prepare.filter.to_string(),
            transparent,
            shares: shares.map(|p| p.display().to_string()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write share metadata as pretty-printed JSON.
pub fn write_share_json(meta: &ShareMeta, path: &Path) -> Result<()> {
    let json = meta.to_json().map_err(|e| EvcError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize share metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| EvcError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write share metadata: {}", e),
    })?;
    Ok(())
}
