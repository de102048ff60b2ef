//! Halftone command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::encode::{halftone_with, DitherMethod, ErrorClamp, HalftoneOptions, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::prepare::{load_image, prepare, ResampleFilter, TargetSize};
use crate::render::write_binary;
use crate::types::GrayscaleImage;

/// Halftone a single image to pure black and white
#[derive(Args, Debug)]
pub struct HalftoneArgs {
    /// Image to halftone
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file
    #[arg(long, short, default_value = "halftone.png")]
    pub output: PathBuf,

    /// Resize to WxH first (default: keep the input size)
    #[arg(long)]
    pub size: Option<TargetSize>,

    /// Resampling filter used when resizing
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Halftoning method
    #[arg(long, value_enum, default_value_t = DitherMethod::FloydSteinberg)]
    pub dither: DitherMethod,

    /// Samples at or above this value are white
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// When diffused error is clamped
    #[arg(long, value_enum, default_value_t = ErrorClamp::Deferred)]
    pub clamp: ErrorClamp,
}

pub fn run(args: HalftoneArgs, printer: &Printer) -> Result<()> {
    let image = load_image(&args.input)?;
    let gray = match args.size {
        Some(size) => prepare(&image, size, args.filter)?,
        None => GrayscaleImage::from_luma(image.to_luma8()),
    };

    let options = HalftoneOptions {
        method: args.dither,
        threshold: args.threshold,
        clamp: args.clamp,
    };
    let binary = halftone_with(&gray, &options);

    write_binary(&binary, &args.output)?;

    let (width, height) = binary.dimensions();
    printer.status(
        "Halftoned",
        &format!(
            "{} -> {} ({}x{}, {})",
            display_path(&args.input),
            display_path(&args.output),
            width,
            height,
            options.method
        ),
    );

    Ok(())
}
