//! Encode command implementation.
//!
//! Runs the full pipeline on a secret and a cover image and writes the two
//! shares (plus an optional JSON sidecar) to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::encode::{encode_files, DitherMethod, EncodeOptions, ErrorClamp, HalftoneOptions};
use crate::error::{EvcError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::prepare::{PrepareOptions, ResampleFilter, TargetSize};
use crate::render::{write_share, write_share_json, ShareMeta};
use crate::types::AlphaMode;

/// Sidecar file written next to the shares.
const METADATA_FILENAME: &str = "shares.json";

/// Split a secret image into two shares textured like a cover image
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Secret image revealed when the shares are stacked
    #[arg(required = true)]
    pub secret: PathBuf,

    /// Cover image whose texture each share carries
    #[arg(required = true)]
    pub cover: PathBuf,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Size both images are resized to, as WxH
    #[arg(long)]
    pub size: Option<TargetSize>,

    /// Halftoning method
    #[arg(long, value_enum)]
    pub dither: Option<DitherMethod>,

    /// Samples at or above this value are white
    #[arg(long)]
    pub threshold: Option<u8>,

    /// When diffused error is clamped
    #[arg(long, value_enum)]
    pub clamp: Option<ErrorClamp>,

    /// Resampling filter used when resizing
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// File names for the two shares
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub names: Option<Vec<String>>,

    /// Write white share pixels as transparent
    #[arg(long)]
    pub transparent: bool,

    /// Write a shares.json sidecar describing the run
    #[arg(long)]
    pub metadata: bool,

    /// Print the run description as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Manifest to read defaults from (default: ./evc.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Settings after merging flags over manifest values over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeSettings {
    pub options: EncodeOptions,
    pub output: PathBuf,
    pub names: [String; 2],
    pub alpha: AlphaMode,
    pub metadata: bool,
}

impl EncodeSettings {
    pub fn resolve(args: &EncodeArgs, manifest: &Manifest) -> Result<Self> {
        let size = match args.size {
            Some(size) => size,
            None => manifest.target_size()?.unwrap_or_default(),
        };

        let prepare = PrepareOptions {
            size,
            filter: args.filter.or(manifest.filter).unwrap_or_default(),
        };

        let defaults = HalftoneOptions::default();
        let halftone = HalftoneOptions {
            method: args.dither.or(manifest.dither).unwrap_or(defaults.method),
            threshold: args.threshold.or(manifest.threshold).unwrap_or(defaults.threshold),
            clamp: args.clamp.or(manifest.clamp).unwrap_or(defaults.clamp),
        };

        let names = match &args.names {
            Some(names) => match names.as_slice() {
                [first, second] => [first.clone(), second.clone()],
                _ => {
                    return Err(EvcError::Parse {
                        message: format!("Expected two share names, got {}", names.len()),
                        help: Some("Pass --names FIRST SECOND".to_string()),
                    })
                }
            },
            None => manifest.names.clone(),
        };

        if names[0] == names[1] {
            return Err(EvcError::Parse {
                message: format!("Both shares would be written to '{}'", names[0]),
                help: Some("Give the two shares different file names".to_string()),
            });
        }

        let alpha = if args.transparent || manifest.transparent {
            AlphaMode::TransparentWhite
        } else {
            AlphaMode::Opaque
        };

        if alpha == AlphaMode::TransparentWhite {
            if let Some(name) = names.iter().find(|n| super::is_lossy(Path::new(n))) {
                return Err(EvcError::Parse {
                    message: format!("Cannot write transparent share '{}' as JPEG", name),
                    help: Some("Use a .png file name for transparent shares".to_string()),
                });
            }
        }

        Ok(Self {
            options: EncodeOptions { prepare, halftone },
            output: args.output.clone().unwrap_or_else(|| manifest.output.clone()),
            names,
            alpha,
            metadata: args.metadata || manifest.metadata,
        })
    }

    /// Paths the two shares are written to.
    pub fn share_paths(&self) -> [PathBuf; 2] {
        [self.output.join(&self.names[0]), self.output.join(&self.names[1])]
    }
}

pub fn run(args: EncodeArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| EvcError::Io {
        path: PathBuf::from("."),
        message: format!("Failed to read working directory: {}", e),
    })?;

    let (manifest, manifest_path) = Manifest::discover(args.config.as_deref(), &cwd)?;
    if let Some(path) = &manifest_path {
        printer.info("Using", &display_path(path));
    }

    let settings = EncodeSettings::resolve(&args, &manifest)?;
    let options = &settings.options;

    printer.status(
        "Encoding",
        &format!(
            "{} over {} ({}, {})",
            display_path(&args.secret),
            display_path(&args.cover),
            options.prepare.size,
            options.halftone.method
        ),
    );

    // Everything is computed before the output directory is touched
    let pair = encode_files(&args.secret, &args.cover, options)?;

    if !settings.output.exists() {
        fs::create_dir_all(&settings.output).map_err(|e| EvcError::Io {
            path: settings.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let paths = settings.share_paths();
    for path in &paths {
        if super::is_lossy(path) {
            printer.warning(
                "Lossy",
                &format!("{} is JPEG; reveal re-thresholds it", display_path(path)),
            );
        }
    }

    write_share(pair.first(), &paths[0], settings.alpha)?;
    write_share(pair.second(), &paths[1], settings.alpha)?;

    let (width, height) = pair.dimensions();
    for path in &paths {
        printer.status("Wrote", &format!("{} ({}x{})", display_path(path), width, height));
    }

    let meta = ShareMeta::new(
        &args.secret,
        &args.cover,
        options,
        settings.alpha == AlphaMode::TransparentWhite,
        [paths[0].as_path(), paths[1].as_path()],
    );

    if settings.metadata {
        let meta_path = settings.output.join(METADATA_FILENAME);
        write_share_json(&meta, &meta_path)?;
        printer.status("Wrote", &display_path(&meta_path));
    }

    if args.json {
        let json = meta.to_json().map_err(|e| EvcError::Parse {
            message: format!("Failed to serialize share metadata: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    printer.status(
        "Finished",
        &format!("{} in {}", plural(2, "share", "shares"), display_path(&settings.output)),
    );

    Ok(())
}
