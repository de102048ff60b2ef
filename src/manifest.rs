//! Project manifest (evc.yaml) parsing.
//!
//! The manifest holds default settings for the `encode` command. Command
//! line flags always win over manifest values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::{DitherMethod, ErrorClamp};
use crate::error::{EvcError, Result};
use crate::prepare::{ResampleFilter, TargetSize};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "evc.yaml";

/// Encode defaults loaded from evc.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Target size as "WxH".
    pub size: Option<String>,

    pub dither: Option<DitherMethod>,

    pub threshold: Option<u8>,

    pub clamp: Option<ErrorClamp>,

    pub filter: Option<ResampleFilter>,

    /// Output directory for shares.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// File names for the first and second share.
    #[serde(default = "default_names")]
    pub names: [String; 2],

    /// Write shares with transparent white pixels.
    pub transparent: bool,

    /// Write a shares.json sidecar next to the shares.
    pub metadata: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("shares")
}

fn default_names() -> [String; 2] {
    ["share1.png".to_string(), "share2.png".to_string()]
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            size: None,
            dither: None,
            threshold: None,
            clamp: None,
            filter: None,
            output: default_output(),
            names: default_names(),
            transparent: false,
            metadata: false,
        }
    }
}

impl Manifest {
    /// Load manifest from an evc.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EvcError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| EvcError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check evc.yaml syntax".to_string()),
        })
    }

    /// Load an explicit manifest, or `evc.yaml` from `dir` if present.
    ///
    /// Returns the manifest and the path it came from, if any.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(MANIFEST_FILENAME);
        if candidate.is_file() {
            return Ok((Self::load(&candidate)?, Some(candidate)));
        }

        Ok((Self::default(), None))
    }

    /// The configured target size, if any.
    pub fn target_size(&self) -> Result<Option<TargetSize>> {
        self.size.as_deref().map(|s| s.parse()).transpose()
    }
}
