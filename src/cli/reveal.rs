//! Reveal command implementation.
//!
//! Reads two shares back from disk and writes their stacked overlay.

use std::path::PathBuf;

use clap::Args;

use crate::encode::DEFAULT_THRESHOLD;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{load_binary, stack, write_binary};

/// Stack two shares to reveal the secret
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// First share
    #[arg(required = true)]
    pub first: PathBuf,

    /// Second share
    #[arg(required = true)]
    pub second: PathBuf,

    /// Output file
    #[arg(long, short, default_value = "revealed.png")]
    pub output: PathBuf,

    /// Threshold used to re-binarize the shares
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,
}

pub fn run(args: RevealArgs, printer: &Printer) -> Result<()> {
    let first = load_binary(&args.first, args.threshold)?;
    let second = load_binary(&args.second, args.threshold)?;

    let stacked = stack(&first, &second)?;
    write_binary(&stacked, &args.output)?;

    let total = stacked.tones().len().max(1);
    let coverage = stacked.black_count() as f64 * 100.0 / total as f64;
    printer.status(
        "Revealed",
        &format!("{} ({:.1}% black)", display_path(&args.output), coverage),
    );

    Ok(())
}
