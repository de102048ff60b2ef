//! Halftoning: grayscale to pure black/white.
//!
//! The default method is Floyd-Steinberg error diffusion, which is what the
//! share generator expects. Ordered (Bayer) dithering and plain thresholding
//! are available for comparison.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::{BinaryImage, GrayscaleImage, Tone};

/// Samples at or above this value become white.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Dithering method used to binarize an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherMethod {
    /// No dithering; direct thresholding.
    None,
    /// Ordered dithering using a Bayer 4x4 threshold matrix.
    #[value(alias = "bayer")]
    #[serde(alias = "bayer")]
    Ordered,
    /// Floyd-Steinberg error diffusion dithering.
    #[default]
    #[value(alias = "fs")]
    #[serde(alias = "fs")]
    FloydSteinberg,
}

impl fmt::Display for DitherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherMethod::None => write!(f, "none"),
            DitherMethod::Ordered => write!(f, "ordered"),
            DitherMethod::FloydSteinberg => write!(f, "floyd-steinberg"),
        }
    }
}

/// When diffused error is clamped back into `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorClamp {
    /// Let accumulated values leave the range; only the final read is clamped.
    #[default]
    Deferred,
    /// Clamp every neighbour as soon as error is added to it.
    PerStep,
}

/// Halftoning settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalftoneOptions {
    pub method: DitherMethod,
    pub threshold: u8,
    pub clamp: ErrorClamp,
}

impl Default for HalftoneOptions {
    fn default() -> Self {
        Self {
            method: DitherMethod::FloydSteinberg,
            threshold: DEFAULT_THRESHOLD,
            clamp: ErrorClamp::Deferred,
        }
    }
}

/// Floyd-Steinberg neighbour offsets `(dx, dy, weight)`.
///
/// ```text
///        *   7/16
///  3/16 5/16 1/16
/// ```
const FLOYD_STEINBERG: [(isize, isize, f32); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Bayer 4x4 ordered dithering threshold matrix, values in `[0, 16)`.
const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Halftone with Floyd-Steinberg error diffusion at the default threshold.
pub fn halftone(image: &GrayscaleImage) -> BinaryImage {
    halftone_with(image, &HalftoneOptions::default())
}

/// Halftone with explicit settings.
///
/// The input is never modified; diffusion works on a private copy.
pub fn halftone_with(image: &GrayscaleImage, options: &HalftoneOptions) -> BinaryImage {
    match options.method {
        DitherMethod::None => threshold_direct(image, options.threshold),
        DitherMethod::Ordered => dither_ordered(image, options.threshold),
        DitherMethod::FloydSteinberg => {
            dither_floyd_steinberg(image, options.threshold, options.clamp)
        }
    }
}

fn threshold_direct(image: &GrayscaleImage, threshold: u8) -> BinaryImage {
    BinaryImage::from_fn(image.width(), image.height(), |x, y| {
        Tone::from_sample(image.get(x, y).unwrap_or(0), threshold)
    })
}

/// Ordered dithering using the Bayer 4x4 matrix.
///
/// Each cell's threshold is spread over the full 8-bit range and centred on
/// `threshold`, so a flat mid-grey comes out as an even checker texture.
fn dither_ordered(image: &GrayscaleImage, threshold: u8) -> BinaryImage {
    BinaryImage::from_fn(image.width(), image.height(), |x, y| {
        let cell = BAYER_4X4[y as usize % 4][x as usize % 4] as f32;
        let offset = ((cell + 0.5) / 16.0 - 0.5) * 255.0;
        let level = threshold as f32 + offset;
        let sample = image.get(x, y).unwrap_or(0) as f32;
        if sample >= level {
            Tone::White
        } else {
            Tone::Black
        }
    })
}

/// Floyd-Steinberg error diffusion.
///
/// Pixels are visited strictly left-to-right, top-to-bottom. Each decision
/// only sees error pushed forward from pixels already visited, so the scan
/// order is part of the output. Out-of-bounds neighbours are skipped and
/// their share of the error is dropped.
fn dither_floyd_steinberg(image: &GrayscaleImage, threshold: u8, clamp: ErrorClamp) -> BinaryImage {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let cut = threshold as f32;

    // Working buffer with f32 samples for error accumulation
    let mut buf: Vec<f32> = image.samples().iter().map(|&s| s as f32).collect();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = buf[idx];
            // NaN compares false and falls to black
            let new = if old >= cut { 255.0 } else { 0.0 };
            buf[idx] = new;
            let err = old - new;

            for (dx, dy, weight) in &FLOYD_STEINBERG {
                let nx = x as isize + dx;
                let ny = y as isize + dy;

                if nx < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }

                let n = ny as usize * width + nx as usize;
                buf[n] += err * weight;
                if clamp == ErrorClamp::PerStep {
                    buf[n] = buf[n].clamp(0.0, 255.0);
                }
            }
        }
    }

    // Visited cells hold exactly 0.0 or 255.0; clamp before the final read
    let tones = buf
        .iter()
        .map(|&v| {
            if v.clamp(0.0, 255.0) >= 255.0 {
                Tone::White
            } else {
                Tone::Black
            }
        })
        .collect();

    BinaryImage::from_parts(image.width(), image.height(), tones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ascii(image: &BinaryImage) -> String {
        (0..image.height())
            .map(|y| {
                (0..image.width())
                    .map(|x| match image.get(x, y) {
                        Some(Tone::Black) => '#',
                        _ => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Halftone with the scan running bottom-to-top, right-to-left.
    fn halftone_reversed(image: &GrayscaleImage) -> BinaryImage {
        let (w, h) = image.dimensions();
        let flipped = GrayscaleImage::from_fn(w, h, |x, y| {
            image.get(w - 1 - x, h - 1 - y).unwrap_or(0)
        });
        let out = halftone(&flipped);
        BinaryImage::from_fn(w, h, |x, y| {
            out.get(w - 1 - x, h - 1 - y).unwrap_or(Tone::Black)
        })
    }

    #[test]
    fn test_single_pixel_threshold() {
        let cases = [(0, Tone::Black), (127, Tone::Black), (128, Tone::White), (255, Tone::White)];
        for (sample, expected) in cases {
            let img = GrayscaleImage::from_fn(1, 1, |_, _| sample);
            let out = halftone(&img);
            assert_eq!(out.dimensions(), (1, 1));
            assert_eq!(out.get(0, 0), Some(expected), "sample {}", sample);
        }
    }

    #[test]
    fn test_output_is_binary() {
        let img = GrayscaleImage::from_fn(16, 9, |x, y| ((x * 17 + y * 29) % 256) as u8);
        let out = halftone(&img);
        assert_eq!(out.dimensions(), (16, 9));
        assert!(out.samples().iter().all(|&s| s == 0 || s == 255));
    }

    #[test]
    fn test_deterministic() {
        let img = GrayscaleImage::from_fn(20, 20, |x, y| ((x * y) % 256) as u8);
        assert_eq!(halftone(&img), halftone(&img));
    }

    #[test]
    fn test_input_not_mutated() {
        let img = GrayscaleImage::from_fn(5, 5, |x, _| (x * 50) as u8);
        let before = img.clone();
        let _ = halftone(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_error_diffuses_right() {
        // 100 -> black, pushes 43.75 right: 100 + 43.75 crosses the threshold
        let img = GrayscaleImage::new(2, 1, vec![100, 100]).unwrap();
        let out = halftone(&img);
        assert_eq!(out.tones(), &[Tone::Black, Tone::White]);
    }

    #[test]
    fn test_scan_order_matters() {
        let img = GrayscaleImage::new(2, 1, vec![100, 90]).unwrap();
        let forward = halftone(&img);
        let reversed = halftone_reversed(&img);
        assert_eq!(forward.tones(), &[Tone::Black, Tone::White]);
        assert_eq!(reversed.tones(), &[Tone::White, Tone::Black]);
    }

    #[test]
    fn test_flat_dark_gray_pattern() {
        let img = GrayscaleImage::from_fn(4, 2, |_, _| 64);
        let out = halftone(&img);
        insta::assert_snapshot!(ascii(&out), @r"
        ####
        #.#.
        ");
    }

    #[test]
    fn test_preserves_mean_roughly() {
        let img = GrayscaleImage::from_fn(32, 32, |_, _| 192);
        let out = halftone(&img);
        let white = out.tones().iter().filter(|t| !t.is_black()).count();
        let ratio = white as f32 / (32.0 * 32.0);
        assert!((ratio - 0.75).abs() < 0.05, "white ratio {}", ratio);
    }

    #[test]
    fn test_per_step_clamp_differs_from_deferred() {
        // (0, 1) is pushed below zero by the 200 above it. Deferred clamping
        // carries that debt forward and keeps (1, 1) black; per-step clamping
        // forgives it and (1, 1) crosses the threshold.
        let img = GrayscaleImage::new(2, 2, vec![200, 150, 5, 85]).unwrap();
        let deferred = halftone(&img);
        let per_step = halftone_with(
            &img,
            &HalftoneOptions {
                clamp: ErrorClamp::PerStep,
                ..HalftoneOptions::default()
            },
        );
        assert_eq!(
            deferred.tones(),
            &[Tone::White, Tone::Black, Tone::Black, Tone::Black]
        );
        assert_eq!(
            per_step.tones(),
            &[Tone::White, Tone::Black, Tone::Black, Tone::White]
        );
    }

    #[test]
    fn test_direct_threshold() {
        let img = GrayscaleImage::new(3, 1, vec![127, 128, 200]).unwrap();
        let out = halftone_with(
            &img,
            &HalftoneOptions {
                method: DitherMethod::None,
                ..HalftoneOptions::default()
            },
        );
        assert_eq!(out.tones(), &[Tone::Black, Tone::White, Tone::White]);
    }

    #[test]
    fn test_ordered_extremes() {
        let black = GrayscaleImage::from_fn(4, 4, |_, _| 0);
        let white = GrayscaleImage::from_fn(4, 4, |_, _| 255);
        let options = HalftoneOptions {
            method: DitherMethod::Ordered,
            ..HalftoneOptions::default()
        };
        assert_eq!(halftone_with(&black, &options).black_count(), 16);
        assert_eq!(halftone_with(&white, &options).black_count(), 0);
    }

    #[test]
    fn test_ordered_mid_gray_is_half() {
        let img = GrayscaleImage::from_fn(4, 4, |_, _| 128);
        let options = HalftoneOptions {
            method: DitherMethod::Ordered,
            ..HalftoneOptions::default()
        };
        assert_eq!(halftone_with(&img, &options).black_count(), 8);
    }

    #[test]
    fn test_empty_image() {
        let img = GrayscaleImage::from_fn(0, 0, |_, _| 0);
        let out = halftone(&img);
        assert_eq!(out.dimensions(), (0, 0));
        assert!(out.tones().is_empty());
    }

    #[test]
    fn test_dither_method_display() {
        assert_eq!(format!("{}", DitherMethod::None), "none");
        assert_eq!(format!("{}", DitherMethod::Ordered), "ordered");
        assert_eq!(format!("{}", DitherMethod::FloydSteinberg), "floyd-steinberg");
    }
}
